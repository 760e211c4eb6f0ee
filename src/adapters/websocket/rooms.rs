//! Broadcast room for the community chat.
//!
//! There is a single room: every connected participant sees every new
//! message.
//!
//! ```text
//! SendChatMessage ──publish──► ChatRoom (broadcast::Sender)
//!                                 ├── client-a
//!                                 ├── client-b
//!                                 └── client-c
//! ```

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::community::ChatFeedEntry;
use crate::ports::ChatBroadcaster;

/// Unique identifier for a WebSocket client connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-process chat fan-out over a tokio broadcast channel.
///
/// Slow receivers that fall more than `capacity` messages behind miss
/// the oldest ones.
pub struct ChatRoom {
    sender: broadcast::Sender<ChatFeedEntry>,
}

impl ChatRoom {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(128)
    }
}

impl Default for ChatRoom {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl ChatBroadcaster for ChatRoom {
    fn publish(&self, entry: ChatFeedEntry) -> usize {
        // No receivers is not an error.
        self.sender.send(entry).unwrap_or(0)
    }

    fn subscribe(&self) -> broadcast::Receiver<ChatFeedEntry> {
        self.sender.subscribe()
    }

    fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
