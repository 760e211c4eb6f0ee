//! Context passed to write-side handlers next to their command.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// The acting participant plus a correlation id that ties together every
/// log line emitted while one command runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    pub user_id: UserId,
    correlation_id: String,
}

impl CommandMetadata {
    /// Assigns a fresh correlation id.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: Uuid::new_v4().to_string(),
        }
    }

    /// Reuses an id from upstream (e.g. a request header).
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = id.into();
        self
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[test]
    fn generated_id_is_stable_across_calls() {
        let meta = CommandMetadata::new(user());
        assert!(Uuid::parse_str(meta.correlation_id()).is_ok());
        assert_eq!(meta.correlation_id(), meta.correlation_id());
    }

    #[test]
    fn upstream_id_replaces_generated_one() {
        let meta = CommandMetadata::new(user()).with_correlation_id("req-42");
        assert_eq!(meta.correlation_id(), "req-42");
    }

    #[test]
    fn separate_commands_get_separate_ids() {
        let a = CommandMetadata::new(user());
        let b = CommandMetadata::new(user());
        assert_ne!(a.correlation_id(), b.correlation_id());
    }
}
