//! Assessment Module - Fagerström nicotine-dependence test.
//!
//! Pure domain logic: six categorical answers go in, a 0–10 point total
//! and a qualitative level come out. No ports, no I/O.
//!
//! # Components
//!
//! - `SurveyAnswers` / `RawSurveyAnswers` - typed and lenient answer sets
//! - `DependenceScoreCalculator` - point table and per-question breakdown
//! - `DependenceScore` / `DependenceLevel` - result and its band

mod answers;
mod calculator;
mod score;

pub use answers::{
    is_affirmative, CigarettesPerDay, MinutesToFirstUse, MostMissedCigarette, RawAnswer,
    RawSurveyAnswers, SurveyAnswers,
};
pub use calculator::{DependenceScoreCalculator, Question, QuestionContribution};
pub use score::{DependenceLevel, DependenceScore, MAX_POINTS};
