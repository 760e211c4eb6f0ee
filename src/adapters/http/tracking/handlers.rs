//! HTTP handlers for the dashboard, profile and daily reports.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::tracking::{
    GetDashboardHandler, GetDashboardQuery, GetProfileOverviewHandler, GetProfileOverviewQuery,
    SubmitDailyReportCommand, SubmitDailyReportHandler,
};
use crate::domain::foundation::{CommandMetadata, Timestamp};
use crate::domain::tracking::Symptom;

use super::dto::{DashboardResponse, DayParams, ProfileResponse, SubmitReportRequest};

#[derive(Clone)]
pub struct TrackingHandlers {
    dashboard_handler: Arc<GetDashboardHandler>,
    profile_handler: Arc<GetProfileOverviewHandler>,
    report_handler: Arc<SubmitDailyReportHandler>,
}

impl TrackingHandlers {
    pub fn new(
        dashboard_handler: Arc<GetDashboardHandler>,
        profile_handler: Arc<GetProfileOverviewHandler>,
        report_handler: Arc<SubmitDailyReportHandler>,
    ) -> Self {
        Self {
            dashboard_handler,
            profile_handler,
            report_handler,
        }
    }
}

/// GET /api/dashboard - Home screen summary
pub async fn get_dashboard(
    State(handlers): State<TrackingHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<DayParams>,
) -> Response {
    let query = GetDashboardQuery {
        user_id: user.id,
        today: params.or_today(),
    };

    match handlers.dashboard_handler.handle(query).await {
        Ok(dashboard) => (StatusCode::OK, Json(DashboardResponse::from(dashboard))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/profile - Profile screen
pub async fn get_profile(
    State(handlers): State<TrackingHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<DayParams>,
) -> Response {
    let query = GetProfileOverviewQuery {
        user_id: user.id,
        today: params.or_today(),
    };

    match handlers.profile_handler.handle(query).await {
        Ok(overview) => (StatusCode::OK, Json(ProfileResponse::from(overview))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/reports - Save today's (or the given day's) report
pub async fn submit_report(
    State(handlers): State<TrackingHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SubmitReportRequest>,
) -> Response {
    let mut symptoms = Vec::with_capacity(req.symptoms.len());
    for label in &req.symptoms {
        match Symptom::parse(label) {
            Some(symptom) => symptoms.push(symptom),
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(format!("Unknown symptom: {}", label))),
                )
                    .into_response()
            }
        }
    }

    let cmd = SubmitDailyReportCommand {
        report_date: req.date.unwrap_or_else(|| Timestamp::now().date()),
        symptoms,
        diary_text: req.diary_text,
        mood_level: req.mood_level,
        craving_level: req.craving_level,
    };

    match handlers
        .report_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
