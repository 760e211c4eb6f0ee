//! DTOs for dashboard, profile and daily report endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::tracking::{Dashboard, ProfileOverview};
use crate::domain::calendar::ProgramEvent;
use crate::domain::foundation::Timestamp;
use crate::domain::program::ProgramProgress;
use crate::domain::tracking::{format_brl, AchievementStatus, DailyReport, UserStats};

/// `?date=YYYY-MM-DD`, the client's local day. Defaults to today in UTC.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayParams {
    pub date: Option<NaiveDate>,
}

impl DayParams {
    pub fn or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Timestamp::now().date())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmitReportRequest {
    pub date: Option<NaiveDate>,
    /// Symptom labels as listed on the form, e.g. "Dor de cabeça".
    pub symptoms: Vec<String>,
    pub diary_text: Option<String>,
    pub mood_level: Option<u8>,
    pub craving_level: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub quit_date: Option<NaiveDate>,
    pub days_smoke_free: u32,
    pub weeks_completed: u32,
    pub money_saved_cents: i64,
    pub money_saved: String,
    pub cigarettes_not_smoked: u64,
    pub lessons_attended: u32,
    pub circles_attended: u32,
    pub activities_completed: u32,
}

impl From<&UserStats> for StatsResponse {
    fn from(stats: &UserStats) -> Self {
        Self {
            quit_date: stats.quit_date,
            days_smoke_free: stats.days_smoke_free,
            weeks_completed: stats.weeks_completed(),
            money_saved_cents: stats.money_saved_cents,
            money_saved: format_brl(stats.money_saved_cents),
            cigarettes_not_smoked: stats.cigarettes_not_smoked,
            lessons_attended: stats.lessons_attended,
            circles_attended: stats.circles_attended,
            activities_completed: stats.activities_completed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementResponse {
    pub title: String,
    pub description: String,
    pub threshold_days: u32,
    pub unlocked: bool,
}

impl From<&AchievementStatus> for AchievementResponse {
    fn from(status: &AchievementStatus) -> Self {
        Self {
            title: status.achievement.title().to_string(),
            description: status.achievement.description().to_string(),
            threshold_days: status.achievement.threshold_days(),
            unlocked: status.unlocked,
        }
    }
}

fn achievement_list(statuses: &[AchievementStatus]) -> Vec<AchievementResponse> {
    statuses.iter().map(AchievementResponse::from).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub first_name: String,
    pub stats: StatsResponse,
    pub program: ProgramProgress,
    pub message: String,
    pub achievements: Vec<AchievementResponse>,
    pub today_events: Vec<ProgramEvent>,
    pub today_report: Option<DailyReport>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            stats: StatsResponse::from(&dashboard.stats),
            achievements: achievement_list(&dashboard.achievements),
            first_name: dashboard.first_name,
            program: dashboard.program,
            message: dashboard.message,
            today_events: dashboard.today_events,
            today_report: dashboard.today_report,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub display_name: String,
    pub email: Option<String>,
    pub days_smoke_free: u32,
    pub weeks_completed: u32,
    pub money_saved_cents: i64,
    pub money_saved: String,
    pub motivation_level: Option<u8>,
    pub achievements: Vec<AchievementResponse>,
    pub member_since: Option<Timestamp>,
}

impl From<ProfileOverview> for ProfileResponse {
    fn from(overview: ProfileOverview) -> Self {
        Self {
            display_name: overview.display_name,
            email: overview.email,
            days_smoke_free: overview.stats.days_smoke_free,
            weeks_completed: overview.stats.weeks_completed,
            money_saved_cents: overview.stats.money_saved_cents,
            money_saved: format_brl(overview.stats.money_saved_cents),
            motivation_level: overview.stats.motivation_level,
            achievements: achievement_list(&overview.achievements),
            member_since: overview.member_since,
        }
    }
}
