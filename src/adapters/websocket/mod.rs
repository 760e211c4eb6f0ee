//! WebSocket adapters for the live community chat.
//!
//! - [`rooms`] - Broadcast room implementing the `ChatBroadcaster` port
//! - [`messages`] - WebSocket message protocol types
//! - [`handler`] - Axum WebSocket upgrade handler

pub mod handler;
pub mod messages;
pub mod rooms;

pub use handler::{ws_handler, WebSocketState};
pub use messages::{ClientMessage, ServerMessage};
pub use rooms::{ChatRoom, ClientId};
