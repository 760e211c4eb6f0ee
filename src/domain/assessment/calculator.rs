//! Dependence Score Calculator - Fagerström test scoring.

use serde::{Deserialize, Serialize};

use super::answers::SurveyAnswers;
use super::score::DependenceScore;

/// The six questions of the instrument, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    MinutesToFirstUse,
    DifficultyAbstainingInForbiddenPlaces,
    MostMissedCigarette,
    CigarettesPerDay,
    SmokesMoreInMorning,
    SmokesWhenIll,
}

/// Points one question added to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionContribution {
    pub question: Question,
    pub points: u8,
}

/// Calculator for Fagerström nicotine-dependence scores.
///
/// Stateless; every call is independent and safe to run concurrently.
pub struct DependenceScoreCalculator;

impl DependenceScoreCalculator {
    /// Sums the six contributions and derives the dependence level.
    ///
    /// Unanswered categorical questions contribute zero.
    pub fn compute_score(answers: &SurveyAnswers) -> DependenceScore {
        let points = Self::breakdown(answers)
            .iter()
            .map(|c| c.points)
            .sum::<u8>();
        DependenceScore::from_points(points)
    }

    /// Per-question points, for explaining a score to the participant.
    pub fn breakdown(answers: &SurveyAnswers) -> [QuestionContribution; 6] {
        let flag = |answered: bool| u8::from(answered);

        [
            QuestionContribution {
                question: Question::MinutesToFirstUse,
                points: answers.minutes_to_first_use.map_or(0, |a| a.points()),
            },
            QuestionContribution {
                question: Question::DifficultyAbstainingInForbiddenPlaces,
                points: flag(answers.difficulty_abstaining_in_forbidden_places),
            },
            QuestionContribution {
                question: Question::MostMissedCigarette,
                points: answers.most_missed_cigarette.map_or(0, |a| a.points()),
            },
            QuestionContribution {
                question: Question::CigarettesPerDay,
                points: answers.cigarettes_per_day.map_or(0, |a| a.points()),
            },
            QuestionContribution {
                question: Question::SmokesMoreInMorning,
                points: flag(answers.smokes_more_in_morning),
            },
            QuestionContribution {
                question: Question::SmokesWhenIll,
                points: flag(answers.smokes_when_ill),
            },
        ]
    }
}
