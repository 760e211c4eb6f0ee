//! ChatRepository port for community messages.

use async_trait::async_trait;

use crate::domain::community::ChatMessage;
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn append(&self, message: &ChatMessage) -> Result<(), DomainError>;

    /// The most recent `limit` messages, oldest first.
    async fn recent(&self, limit: usize) -> Result<Vec<ChatMessage>, DomainError>;
}
