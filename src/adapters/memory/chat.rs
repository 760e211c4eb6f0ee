//! In-memory chat history.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::community::ChatMessage;
use crate::domain::foundation::DomainError;
use crate::ports::ChatRepository;

#[derive(Debug, Default)]
pub struct InMemoryChatRepository {
    messages: RwLock<Vec<ChatMessage>>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn append(&self, message: &ChatMessage) -> Result<(), DomainError> {
        let mut messages = self.messages.write().await;
        // Keep ordered by creation time even if clocks disagree.
        let index = messages.partition_point(|m| m.created_at <= message.created_at);
        messages.insert(index, message.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ChatMessage>, DomainError> {
        let messages = self.messages.read().await;
        let skip = messages.len().saturating_sub(limit);
        Ok(messages[skip..].to_vec())
    }
}
