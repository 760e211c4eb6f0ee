//! HTTP adapter for the Fagerström questionnaire.

mod dto;
mod handlers;
mod routes;

pub use dto::{PreviewScoreRequest, PreviewScoreResponse, ScoreResponse};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
