//! Community module - the shared support chat.

mod message;

pub use message::{ChatFeedEntry, ChatMessage, DEFAULT_MAX_MESSAGE_CHARS};
