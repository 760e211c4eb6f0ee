//! Community chat handlers.

mod list_chat_messages;
mod send_chat_message;

pub use list_chat_messages::{ListChatMessagesHandler, ListChatMessagesQuery};
pub use send_chat_message::{SendChatMessageCommand, SendChatMessageHandler};
