//! ChatBroadcaster port - fan-out of new chat messages to live viewers.

use tokio::sync::broadcast;

use crate::domain::community::ChatFeedEntry;

/// Publishes new feed entries to every live subscriber.
///
/// Entries are published with `is_own = false`; each subscriber decides
/// ownership against its own viewer.
pub trait ChatBroadcaster: Send + Sync {
    /// Returns the number of subscribers that received the entry.
    fn publish(&self, entry: ChatFeedEntry) -> usize;

    fn subscribe(&self) -> broadcast::Receiver<ChatFeedEntry>;

    /// Participants currently watching the feed.
    fn listener_count(&self) -> usize;
}
