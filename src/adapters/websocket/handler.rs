//! WebSocket upgrade handler for the live chat feed.
//!
//! Connection lifecycle:
//! 1. Require an authenticated participant
//! 2. Upgrade to WebSocket and subscribe to the chat room
//! 3. Forward new messages, marking the viewer's own ones
//! 4. Answer pings until the client disconnects

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{stream::SplitSink, SinkExt, StreamExt};
use tokio::sync::{broadcast::error::RecvError, mpsc};

use crate::adapters::http::middleware::RequireAuth;
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::ChatBroadcaster;

use super::messages::{ClientMessage, ConnectedMessage, ErrorMessage, PongMessage, ServerMessage};
use super::rooms::ClientId;

#[derive(Clone)]
pub struct WebSocketState {
    pub broadcaster: Arc<dyn ChatBroadcaster>,
}

impl WebSocketState {
    pub fn new(broadcaster: Arc<dyn ChatBroadcaster>) -> Self {
        Self { broadcaster }
    }
}

/// `GET /api/chat/live`
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    RequireAuth(user): RequireAuth,
    State(state): State<WebSocketState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, user.id, state))
}

async fn handle_socket(socket: WebSocket, viewer: UserId, state: WebSocketState) {
    let (mut sender, mut receiver) = socket.split();
    let client_id = ClientId::new();
    let mut room_rx = state.broadcaster.subscribe();

    let connected = ServerMessage::Connected(ConnectedMessage {
        client_id: client_id.to_string(),
        online: state.broadcaster.listener_count(),
        timestamp: Timestamp::now().as_datetime().to_rfc3339(),
    });
    if let Err(e) = send_message(&mut sender, &connected).await {
        tracing::debug!("Failed to send connected message: {}", e);
        return;
    }
    tracing::debug!(client_id = %client_id, user_id = %viewer, "chat client connected");

    // Replies are produced by the receive loop and sent by the send loop.
    let (reply_tx, mut reply_rx) = mpsc::channel::<ServerMessage>(8);

    let send_client = client_id.clone();
    let mut send_task = tokio::spawn(async move {
        loop {
            let outgoing = tokio::select! {
                received = room_rx.recv() => match received {
                    Ok(mut entry) => {
                        entry.is_own = entry.user_id == viewer;
                        ServerMessage::ChatMessage(entry)
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(client_id = %send_client, skipped, "chat client lagging");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                },
                Some(reply) = reply_rx.recv() => reply,
            };

            if let Err(e) = send_message(&mut sender, &outgoing).await {
                tracing::debug!(client_id = %send_client, "Send error, closing connection: {}", e);
                break;
            }
        }
    });

    let recv_client = client_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Text(text)) => {
                    let reply = match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(ClientMessage::Ping) => ServerMessage::Pong(PongMessage {
                            timestamp: Timestamp::now().as_datetime().to_rfc3339(),
                        }),
                        Err(_) => ServerMessage::Error(ErrorMessage {
                            code: "UNSUPPORTED_FRAME".to_string(),
                            message: "Only pings are accepted; post messages over HTTP"
                                .to_string(),
                        }),
                    };
                    if reply_tx.send(reply).await.is_err() {
                        break;
                    }
                }
                Ok(Message::Close(_)) => {
                    tracing::debug!(client_id = %recv_client, "Client sent close frame");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(client_id = %recv_client, "Receive error: {}", e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
    tracing::debug!(client_id = %client_id, "chat client disconnected");
}

async fn send_message(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    sender.send(Message::Text(json)).await
}
