//! Loads a participant's stats refreshed to a given day.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::intake::ClinicalIntake;
use crate::domain::tracking::{PackPricing, UserStats};
use crate::ports::{IntakeRepository, StatsRepository};

/// Stats with the day count and savings recomputed for `today`. The
/// daily baseline is the "current per day" answer from the intake.
pub struct CurrentStats {
    stats: Arc<dyn StatsRepository>,
    intakes: Arc<dyn IntakeRepository>,
    pricing: PackPricing,
}

impl CurrentStats {
    pub fn new(
        stats: Arc<dyn StatsRepository>,
        intakes: Arc<dyn IntakeRepository>,
        pricing: PackPricing,
    ) -> Self {
        Self {
            stats,
            intakes,
            pricing,
        }
    }

    /// Returns the refreshed stats and the intake they were derived from.
    /// Participants without a stats row get zeroed stats.
    pub async fn load(
        &self,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<(UserStats, Option<ClinicalIntake>), DomainError> {
        let intake = self.intakes.find_by_user(user_id).await?;
        let mut stats = self
            .stats
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| UserStats::new(user_id.clone(), None, Timestamp::now()));

        let baseline = intake.as_ref().and_then(|i| i.smoking.current_per_day);
        stats.refresh(today, baseline, self.pricing);
        Ok((stats, intake))
    }
}
