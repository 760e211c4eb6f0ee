//! HTTP routes for program endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{complete_week, list_weeks, ProgramHandlers};

pub fn program_routes(handlers: ProgramHandlers) -> Router {
    Router::new()
        .route("/weeks", get(list_weeks))
        .route("/weeks/:week/complete", post(complete_week))
        .with_state(handlers)
}
