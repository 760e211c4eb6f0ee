//! HTTP routes for intake endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_intake, submit_intake, IntakeHandlers};

pub fn intake_routes(handlers: IntakeHandlers) -> Router {
    Router::new()
        .route("/", get(get_intake).post(submit_intake))
        .with_state(handlers)
}
