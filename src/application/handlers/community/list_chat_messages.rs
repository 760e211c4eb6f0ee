//! ListChatMessages - Query handler for the chat history.

use std::sync::Arc;

use crate::domain::community::ChatFeedEntry;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::participant;
use crate::ports::{ChatRepository, ProfileRepository};

#[derive(Debug, Clone)]
pub struct ListChatMessagesQuery {
    pub viewer: UserId,
    pub limit: Option<usize>,
}

pub struct ListChatMessagesHandler {
    messages: Arc<dyn ChatRepository>,
    profiles: Arc<dyn ProfileRepository>,
    history_limit: usize,
}

impl ListChatMessagesHandler {
    pub fn new(
        messages: Arc<dyn ChatRepository>,
        profiles: Arc<dyn ProfileRepository>,
        history_limit: usize,
    ) -> Self {
        Self {
            messages,
            profiles,
            history_limit,
        }
    }

    /// Most recent messages, oldest first. Requested limits are capped at
    /// the configured history size.
    pub async fn handle(
        &self,
        query: ListChatMessagesQuery,
    ) -> Result<Vec<ChatFeedEntry>, DomainError> {
        let limit = query
            .limit
            .map_or(self.history_limit, |l| l.min(self.history_limit));
        let messages = self.messages.recent(limit).await?;

        let mut authors: Vec<UserId> = messages.iter().map(|m| m.user_id.clone()).collect();
        authors.sort();
        authors.dedup();
        let names = self.profiles.full_names(&authors).await?;

        Ok(messages
            .iter()
            .map(|m| {
                let author = participant::display_name(names.get(&m.user_id).map(String::as_str));
                ChatFeedEntry::new(m, author, Some(&query.viewer))
            })
            .collect())
    }
}
