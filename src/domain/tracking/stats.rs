//! Per-participant counters shown on the dashboard and profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::calendar::EventKind;
use crate::domain::foundation::{Timestamp, UserId};

use super::savings::{self, PackPricing};

/// Whole days between the quit date and `today`, in either direction.
/// The quit day itself counts as zero.
pub fn days_smoke_free(quit_date: NaiveDate, today: NaiveDate) -> u32 {
    (today - quit_date).num_days().unsigned_abs() as u32
}

pub fn weeks_completed(days_smoke_free: u32) -> u32 {
    days_smoke_free / 7
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub user_id: UserId,
    pub quit_date: Option<NaiveDate>,
    pub days_smoke_free: u32,
    pub money_saved_cents: i64,
    pub cigarettes_not_smoked: u64,
    pub lessons_attended: u32,
    pub circles_attended: u32,
    pub activities_completed: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserStats {
    pub fn new(user_id: UserId, quit_date: Option<NaiveDate>, now: Timestamp) -> Self {
        Self {
            user_id,
            quit_date,
            days_smoke_free: 0,
            money_saved_cents: 0,
            cigarettes_not_smoked: 0,
            lessons_attended: 0,
            circles_attended: 0,
            activities_completed: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Recomputes the derived counters as of `today`.
    ///
    /// Without a quit date the stored values are left alone. Without a
    /// daily baseline only the day count moves.
    pub fn refresh(
        &mut self,
        today: NaiveDate,
        cigarettes_per_day: Option<u32>,
        pricing: PackPricing,
    ) {
        let Some(quit_date) = self.quit_date else {
            return;
        };

        self.days_smoke_free = days_smoke_free(quit_date, today);
        if let Some(per_day) = cigarettes_per_day {
            self.cigarettes_not_smoked = savings::cigarettes_not_smoked(self.days_smoke_free, per_day);
            self.money_saved_cents = savings::money_saved(self.days_smoke_free, per_day, pricing);
        }
    }

    /// Bumps the attendance counter for the event kind.
    pub fn record_attendance(&mut self, kind: EventKind, now: Timestamp) {
        match kind {
            EventKind::Lesson => self.lessons_attended += 1,
            EventKind::Circle => self.circles_attended += 1,
            EventKind::Activity => self.activities_completed += 1,
        }
        self.updated_at = now;
    }

    pub fn weeks_completed(&self) -> u32 {
        weeks_completed(self.days_smoke_free)
    }
}
