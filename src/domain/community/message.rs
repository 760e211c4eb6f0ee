//! Community chat messages and the per-viewer feed entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChatMessageId, Timestamp, UserId, ValidationError};

/// Default limit on message length, in characters.
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub user_id: UserId,
    pub body: String,
    pub created_at: Timestamp,
}

impl ChatMessage {
    /// Validates and trims the text. Length is counted in characters
    /// after trimming.
    pub fn new(
        user_id: UserId,
        text: &str,
        max_chars: usize,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let body = text.trim();
        if body.is_empty() {
            return Err(ValidationError::empty_field("message"));
        }
        if body.chars().count() > max_chars {
            return Err(ValidationError::too_long("message", max_chars));
        }

        Ok(Self {
            id: ChatMessageId::new(),
            user_id,
            body: body.to_string(),
            created_at: now,
        })
    }
}

/// A message as a particular viewer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatFeedEntry {
    pub id: ChatMessageId,
    pub user_id: UserId,
    pub author_name: String,
    pub body: String,
    pub time: String,
    pub is_own: bool,
    pub created_at: Timestamp,
}

impl ChatFeedEntry {
    pub fn new(message: &ChatMessage, author_name: &str, viewer: Option<&UserId>) -> Self {
        Self {
            id: message.id,
            user_id: message.user_id.clone(),
            author_name: author_name.to_string(),
            body: message.body.clone(),
            time: message.created_at.hour_minute(),
            is_own: viewer == Some(&message.user_id),
            created_at: message.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn trims_body() {
        let msg = ChatMessage::new(user("a"), "  olá pessoal \n", 1000, Timestamp::now()).unwrap();
        assert_eq!(msg.body, "olá pessoal");
    }

    #[test]
    fn whitespace_only_is_rejected() {
        let err = ChatMessage::new(user("a"), " \t ", 1000, Timestamp::now()).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }

    #[test]
    fn length_limit_counts_characters() {
        let exactly = "é".repeat(10);
        assert!(ChatMessage::new(user("a"), &exactly, 10, Timestamp::now()).is_ok());
        let over = "é".repeat(11);
        let err = ChatMessage::new(user("a"), &over, 10, Timestamp::now()).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 10, .. }));
    }

    #[test]
    fn feed_entry_marks_own_messages() {
        let msg = ChatMessage::new(user("a"), "oi", 1000, Timestamp::now()).unwrap();
        assert!(ChatFeedEntry::new(&msg, "Ana", Some(&user("a"))).is_own);
        assert!(!ChatFeedEntry::new(&msg, "Ana", Some(&user("b"))).is_own);
        assert!(!ChatFeedEntry::new(&msg, "Ana", None).is_own);
    }
}
