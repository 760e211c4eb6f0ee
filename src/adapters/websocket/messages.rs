//! WebSocket message types for the live chat feed.
//!
//! The feed is read-only over the socket: participants post through
//! `POST /api/chat/messages` and every connected viewer receives the
//! resulting `chat.message` frame. Clients may only send pings.

use serde::{Deserialize, Serialize};

use crate::domain::community::ChatFeedEntry;

// ============================================
// Server → Client Messages
// ============================================

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Connected(ConnectedMessage),

    #[serde(rename = "chat.message")]
    ChatMessage(ChatFeedEntry),

    Error(ErrorMessage),

    Pong(PongMessage),
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectedMessage {
    pub client_id: String,
    /// Viewers on the feed, this one included.
    pub online: usize,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PongMessage {
    pub timestamp: String,
}

// ============================================
// Client → Server Messages
// ============================================

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Ping,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pong_serializes_with_type_tag() {
        let json = serde_json::to_value(ServerMessage::Pong(PongMessage {
            timestamp: "t".into(),
        }))
        .unwrap();
        assert_eq!(json["type"], "pong");
    }

    #[test]
    fn chat_entries_use_dotted_tag() {
        use crate::domain::community::{ChatFeedEntry, ChatMessage};
        use crate::domain::foundation::{Timestamp, UserId};

        let msg = ChatMessage::new(UserId::new("u1").unwrap(), "oi", 1000, Timestamp::now()).unwrap();
        let json = serde_json::to_value(ServerMessage::ChatMessage(ChatFeedEntry::new(&msg, "Ana", None)))
            .unwrap();
        assert_eq!(json["type"], "chat.message");
        assert_eq!(json["author_name"], "Ana");
    }

    #[test]
    fn ping_deserializes() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }

    #[test]
    fn chat_text_from_client_is_not_a_known_frame() {
        let parsed = serde_json::from_str::<ClientMessage>(r#"{"type":"send","text":"oi"}"#);
        assert!(parsed.is_err());
    }
}
