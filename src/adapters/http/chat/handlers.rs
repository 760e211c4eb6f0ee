//! HTTP handlers for the community chat.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_domain_error;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::community::{
    ListChatMessagesHandler, ListChatMessagesQuery, SendChatMessageCommand,
    SendChatMessageHandler,
};
use crate::domain::foundation::CommandMetadata;

use super::dto::{HistoryParams, SendMessageRequest};

#[derive(Clone)]
pub struct ChatHandlers {
    list_handler: Arc<ListChatMessagesHandler>,
    send_handler: Arc<SendChatMessageHandler>,
}

impl ChatHandlers {
    pub fn new(
        list_handler: Arc<ListChatMessagesHandler>,
        send_handler: Arc<SendChatMessageHandler>,
    ) -> Self {
        Self {
            list_handler,
            send_handler,
        }
    }
}

/// GET /api/chat/messages - Recent history, oldest first
pub async fn list_messages(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<HistoryParams>,
) -> Response {
    let query = ListChatMessagesQuery {
        viewer: user.id,
        limit: params.limit,
    };

    match handlers.list_handler.handle(query).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/chat/messages - Post to the group
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let cmd = SendChatMessageCommand { text: req.message };

    match handlers
        .send_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
