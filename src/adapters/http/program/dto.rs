//! DTOs for program endpoints.

use serde::Serialize;

use crate::application::handlers::program::CompleteWeekResult;
use crate::domain::program::{ProgramProgress, WeekCompletion};

#[derive(Debug, Clone, Serialize)]
pub struct CompleteWeekResponse {
    /// False when the week had already been completed.
    pub newly_completed: bool,
    pub next_current_week: Option<u8>,
    pub progress: ProgramProgress,
}

impl From<CompleteWeekResult> for CompleteWeekResponse {
    fn from(result: CompleteWeekResult) -> Self {
        let (newly_completed, next_current_week) = match result.completion {
            WeekCompletion::Completed { next_current } => (true, next_current.map(|w| w.value())),
            WeekCompletion::AlreadyCompleted => (false, None),
        };
        Self {
            newly_completed,
            next_current_week,
            progress: result.progress,
        }
    }
}
