//! DTOs for intake endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::assessment::ScoreResponse;
use crate::application::handlers::intake::SubmitIntakeResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitIntakeResponse {
    pub score: ScoreResponse,
    pub first_submission: bool,
    pub message: String,
}

impl From<SubmitIntakeResult> for SubmitIntakeResponse {
    fn from(result: SubmitIntakeResult) -> Self {
        Self {
            score: result.score.into(),
            first_submission: result.first_submission,
            message: "Anamnese salva com sucesso".to_string(),
        }
    }
}
