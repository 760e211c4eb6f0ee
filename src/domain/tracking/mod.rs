//! Tracking module - smoke-free counters, achievements and daily reports.

mod milestones;
mod report;
mod savings;
mod stats;

pub use milestones::{achievements, contextual_message, Achievement, AchievementStatus};
pub use report::{DailyReport, Symptom, MAX_LEVEL};
pub use savings::{cigarettes_not_smoked, format_brl, money_saved, PackPricing};
pub use stats::{days_smoke_free, weeks_completed, UserStats};
