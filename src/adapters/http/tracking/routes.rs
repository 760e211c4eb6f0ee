//! HTTP routes for tracking endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_dashboard, get_profile, submit_report, TrackingHandlers};

/// Mounted at `/api`; paths are absolute within it.
pub fn tracking_routes(handlers: TrackingHandlers) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/profile", get(get_profile))
        .route("/reports", post(submit_report))
        .with_state(handlers)
}
