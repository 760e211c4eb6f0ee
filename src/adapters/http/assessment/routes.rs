//! HTTP routes for the assessment endpoint.

use axum::{routing::post, Router};

use super::handlers::{preview_score, AssessmentHandlers};

/// Public router; scoring needs no account.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/preview", post(preview_score))
        .with_state(handlers)
}
