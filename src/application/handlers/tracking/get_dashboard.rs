//! GetDashboard - Query handler for the home screen.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::calendar::ProgramEvent;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::participant;
use crate::domain::program::{ProgramEnrollment, ProgramProgress};
use crate::domain::tracking::{
    achievements, contextual_message, AchievementStatus, DailyReport, UserStats,
};
use crate::ports::{DailyReportRepository, EventRepository, ProfileRepository, ProgramRepository};

use super::current_stats::CurrentStats;

#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub user_id: UserId,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub first_name: String,
    pub stats: UserStats,
    pub program: ProgramProgress,
    pub message: String,
    pub achievements: Vec<AchievementStatus>,
    pub today_events: Vec<ProgramEvent>,
    pub today_report: Option<DailyReport>,
}

pub struct GetDashboardHandler {
    profiles: Arc<dyn ProfileRepository>,
    program: Arc<dyn ProgramRepository>,
    events: Arc<dyn EventRepository>,
    reports: Arc<dyn DailyReportRepository>,
    current_stats: Arc<CurrentStats>,
}

impl GetDashboardHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        program: Arc<dyn ProgramRepository>,
        events: Arc<dyn EventRepository>,
        reports: Arc<dyn DailyReportRepository>,
        current_stats: Arc<CurrentStats>,
    ) -> Self {
        Self {
            profiles,
            program,
            events,
            reports,
            current_stats,
        }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<Dashboard, DomainError> {
        let user_id = &query.user_id;

        let profile = self.profiles.find_by_user(user_id).await?;
        let first_name = participant::first_name(
            profile.as_ref().map(|p| p.identification.full_name.as_str()),
        )
        .to_string();

        let (stats, _) = self.current_stats.load(user_id, query.today).await?;
        let program = self
            .program
            .find_enrollment(user_id)
            .await?
            .unwrap_or_else(|| ProgramEnrollment::start(user_id.clone()))
            .progress();
        let today_events = self.events.list_between(query.today, query.today).await?;
        let today_report = self.reports.find_by_date(user_id, query.today).await?;

        Ok(Dashboard {
            first_name,
            message: contextual_message(stats.days_smoke_free).to_string(),
            achievements: achievements(stats.days_smoke_free),
            stats,
            program,
            today_events,
            today_report,
        })
    }
}
