//! StatsRepository port for the per-user counters.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::tracking::UserStats;

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserStats>, DomainError>;

    /// Insert or replace the stats row of the user.
    async fn save(&self, stats: &UserStats) -> Result<(), DomainError>;
}
