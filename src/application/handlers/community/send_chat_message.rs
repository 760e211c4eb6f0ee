//! SendChatMessage - Command handler for posting to the support chat.

use std::sync::Arc;

use crate::domain::community::{ChatFeedEntry, ChatMessage};
use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp};
use crate::domain::participant;
use crate::ports::{ChatBroadcaster, ChatRepository, ProfileRepository};

#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub text: String,
}

pub struct SendChatMessageHandler {
    messages: Arc<dyn ChatRepository>,
    profiles: Arc<dyn ProfileRepository>,
    broadcaster: Arc<dyn ChatBroadcaster>,
    max_chars: usize,
}

impl SendChatMessageHandler {
    pub fn new(
        messages: Arc<dyn ChatRepository>,
        profiles: Arc<dyn ProfileRepository>,
        broadcaster: Arc<dyn ChatBroadcaster>,
        max_chars: usize,
    ) -> Self {
        Self {
            messages,
            profiles,
            broadcaster,
            max_chars,
        }
    }

    /// Stores the message and fans it out to live subscribers. The
    /// returned entry is the sender's own view of it.
    pub async fn handle(
        &self,
        cmd: SendChatMessageCommand,
        metadata: CommandMetadata,
    ) -> Result<ChatFeedEntry, DomainError> {
        let message = ChatMessage::new(
            metadata.user_id.clone(),
            &cmd.text,
            self.max_chars,
            Timestamp::now(),
        )?;
        self.messages.append(&message).await?;

        let profile = self.profiles.find_by_user(&metadata.user_id).await?;
        let author = participant::display_name(
            profile.as_ref().map(|p| p.identification.full_name.as_str()),
        );

        let receivers = self
            .broadcaster
            .publish(ChatFeedEntry::new(&message, author, None));
        tracing::debug!(
            user_id = %metadata.user_id,
            correlation_id = %metadata.correlation_id(),
            message_id = %message.id,
            receivers,
            "chat message sent"
        );

        Ok(ChatFeedEntry::new(&message, author, Some(&metadata.user_id)))
    }
}
