//! HTTP adapter for the community chat.

mod dto;
mod handlers;
mod routes;

pub use dto::{HistoryParams, SendMessageRequest};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
