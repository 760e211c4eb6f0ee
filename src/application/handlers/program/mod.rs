//! Program handlers.

mod complete_week;
mod list_program_weeks;

pub use complete_week::{CompleteWeekCommand, CompleteWeekHandler, CompleteWeekResult};
pub use list_program_weeks::{
    ListProgramWeeksHandler, ListProgramWeeksQuery, ProgramOverview, WeekOverview,
};
