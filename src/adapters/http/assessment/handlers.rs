//! HTTP handler for scoring the questionnaire.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::application::handlers::assessment::{PreviewScoreHandler, PreviewScoreQuery};

use super::dto::{PreviewScoreRequest, PreviewScoreResponse};

#[derive(Clone)]
pub struct AssessmentHandlers {
    preview_handler: Arc<PreviewScoreHandler>,
}

impl AssessmentHandlers {
    pub fn new(preview_handler: Arc<PreviewScoreHandler>) -> Self {
        Self { preview_handler }
    }
}

/// POST /api/assessment/preview - Score answers without saving them
pub async fn preview_score(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<PreviewScoreRequest>,
) -> impl IntoResponse {
    let result = handlers.preview_handler.handle(PreviewScoreQuery {
        answers: req.answers,
    });
    (StatusCode::OK, Json(PreviewScoreResponse::from(result)))
}
