//! PreviewScore - Query handler scoring answers without persisting them.
//!
//! Called on every answer change so the form can show the running score.

use serde::Serialize;

use crate::domain::assessment::{
    DependenceScore, DependenceScoreCalculator, QuestionContribution, RawSurveyAnswers,
    SurveyAnswers,
};

#[derive(Debug, Clone)]
pub struct PreviewScoreQuery {
    pub answers: RawSurveyAnswers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewScoreResult {
    pub score: DependenceScore,
    pub breakdown: [QuestionContribution; 6],
    /// False while a categorical question is still unanswered.
    pub complete: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PreviewScoreHandler;

impl PreviewScoreHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: PreviewScoreQuery) -> PreviewScoreResult {
        let answers = SurveyAnswers::from_raw(&query.answers);
        PreviewScoreResult {
            score: DependenceScoreCalculator::compute_score(&answers),
            breakdown: DependenceScoreCalculator::breakdown(&answers),
            complete: answers.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{DependenceLevel, RawAnswer};

    fn text(s: &str) -> Option<RawAnswer> {
        Some(RawAnswer::Text(s.to_string()))
    }

    #[test]
    fn partial_answers_score_what_is_there() {
        let result = PreviewScoreHandler::new().handle(PreviewScoreQuery {
            answers: RawSurveyAnswers {
                minutes_to_first_use: text("≤ 5 min"),
                smokes_when_ill: Some(RawAnswer::Flag(true)),
                ..Default::default()
            },
        });

        assert_eq!(result.score.points(), 4);
        assert_eq!(result.score.level(), DependenceLevel::Mild);
        assert!(!result.complete);
        assert_eq!(result.breakdown.iter().map(|c| c.points).sum::<u8>(), 4);
    }

    #[test]
    fn maximal_answers_score_ten() {
        let result = PreviewScoreHandler::new().handle(PreviewScoreQuery {
            answers: RawSurveyAnswers {
                minutes_to_first_use: text("≤ 5 min"),
                difficulty_abstaining_in_forbidden_places: text("Sim"),
                most_missed_cigarette: text("O primeiro da manhã"),
                cigarettes_per_day: text("31 ou mais"),
                smokes_more_in_morning: text("Sim"),
                smokes_when_ill: text("Sim"),
            },
        });

        assert_eq!(result.score.points(), 10);
        assert_eq!(result.score.level(), DependenceLevel::High);
        assert!(result.complete);
    }
}
