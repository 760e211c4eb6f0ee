//! HTTP routes for chat endpoints, including the live WebSocket feed.

use axum::{routing::get, Router};

use crate::adapters::websocket::{ws_handler, WebSocketState};

use super::handlers::{list_messages, send_message, ChatHandlers};

pub fn chat_routes(handlers: ChatHandlers, live: WebSocketState) -> Router {
    let live_routes = Router::new()
        .route("/live", get(ws_handler))
        .with_state(live);

    Router::new()
        .route("/messages", get(list_messages).post(send_message))
        .with_state(handlers)
        .merge(live_routes)
}
