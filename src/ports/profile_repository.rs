//! ProfileRepository port for participant profile persistence.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::participant::UserProfile;

/// Repository for participant profiles, one per user.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert or replace the profile keyed by its user.
    async fn upsert(&self, profile: &UserProfile) -> Result<(), DomainError>;

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    /// Full names for the given users. Users without a profile are absent
    /// from the map.
    async fn full_names(&self, user_ids: &[UserId])
        -> Result<HashMap<UserId, String>, DomainError>;
}
