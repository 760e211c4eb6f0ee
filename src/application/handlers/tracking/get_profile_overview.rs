//! GetProfileOverview - Query handler for the profile screen.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::tracking::{achievements, AchievementStatus};
use crate::ports::ProfileRepository;

use super::current_stats::CurrentStats;

#[derive(Debug, Clone)]
pub struct GetProfileOverviewQuery {
    pub user_id: UserId,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub days_smoke_free: u32,
    pub weeks_completed: u32,
    pub money_saved_cents: i64,
    pub motivation_level: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOverview {
    pub display_name: String,
    pub email: Option<String>,
    pub stats: ProfileStats,
    pub achievements: Vec<AchievementStatus>,
    pub member_since: Option<Timestamp>,
}

pub struct GetProfileOverviewHandler {
    profiles: Arc<dyn ProfileRepository>,
    current_stats: Arc<CurrentStats>,
}

impl GetProfileOverviewHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, current_stats: Arc<CurrentStats>) -> Self {
        Self {
            profiles,
            current_stats,
        }
    }

    pub async fn handle(
        &self,
        query: GetProfileOverviewQuery,
    ) -> Result<ProfileOverview, DomainError> {
        let profile = self.profiles.find_by_user(&query.user_id).await?;
        let (stats, intake) = self.current_stats.load(&query.user_id, query.today).await?;

        let (display_name, email, member_since) = match &profile {
            Some(p) => (
                p.display_name().to_string(),
                p.identification.email.clone(),
                Some(p.created_at),
            ),
            None => (crate::domain::participant::display_name(None).to_string(), None, None),
        };

        Ok(ProfileOverview {
            display_name,
            email,
            stats: ProfileStats {
                days_smoke_free: stats.days_smoke_free,
                weeks_completed: stats.weeks_completed(),
                money_saved_cents: stats.money_saved_cents,
                motivation_level: intake.and_then(|i| i.motivation.motivation_level),
            },
            achievements: achievements(stats.days_smoke_free),
            member_since,
        })
    }
}
