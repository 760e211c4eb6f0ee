//! Tracking handlers - dashboard, profile overview and daily reports.

mod current_stats;
mod get_dashboard;
mod get_profile_overview;
mod submit_daily_report;

pub use current_stats::CurrentStats;
pub use get_dashboard::{Dashboard, GetDashboardHandler, GetDashboardQuery};
pub use get_profile_overview::{
    GetProfileOverviewHandler, GetProfileOverviewQuery, ProfileOverview, ProfileStats,
};
pub use submit_daily_report::{SubmitDailyReportCommand, SubmitDailyReportHandler};
