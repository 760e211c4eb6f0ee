//! HTTP adapter for dashboard, profile and daily reports.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AchievementResponse, DashboardResponse, DayParams, ProfileResponse, StatsResponse,
    SubmitReportRequest,
};
pub use handlers::TrackingHandlers;
pub use routes::tracking_routes;
