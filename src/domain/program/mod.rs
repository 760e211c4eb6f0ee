//! Program module - the twelve weekly steps and participant progress.

mod progress;
mod week;

pub use progress::{ProgramEnrollment, ProgramProgress, UserProgress, WeekCompletion, WeekStatus};
pub use week::{ProgramPhase, ProgramWeek, WeekNumber, TOTAL_WEEKS};
