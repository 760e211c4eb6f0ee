//! DTOs for the assessment endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::assessment::PreviewScoreResult;
use crate::domain::assessment::{DependenceScore, QuestionContribution, RawSurveyAnswers};

/// Request body: the six answers as the form sends them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewScoreRequest {
    #[serde(flatten)]
    pub answers: RawSurveyAnswers,
}

/// A score as shown to participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub points: u8,
    pub level: String,
    pub label: String,
}

impl From<DependenceScore> for ScoreResponse {
    fn from(score: DependenceScore) -> Self {
        Self {
            points: score.points(),
            level: score.level().code().to_string(),
            label: score.level().label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewScoreResponse {
    pub score: ScoreResponse,
    pub breakdown: Vec<QuestionContribution>,
    pub complete: bool,
}

impl From<PreviewScoreResult> for PreviewScoreResponse {
    fn from(result: PreviewScoreResult) -> Self {
        Self {
            score: result.score.into(),
            breakdown: result.breakdown.to_vec(),
            complete: result.complete,
        }
    }
}
