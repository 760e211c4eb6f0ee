//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod calendar;
pub mod community;
pub mod intake;
pub mod program;
pub mod tracking;

pub use assessment::{PreviewScoreHandler, PreviewScoreQuery, PreviewScoreResult};
pub use calendar::{
    CalendarView, GetCalendarMonthHandler, GetCalendarMonthQuery, ListEventsHandler,
    ListEventsQuery, RecordAttendanceCommand, RecordAttendanceHandler, RecordAttendanceResult,
};
pub use community::{
    ListChatMessagesHandler, ListChatMessagesQuery, SendChatMessageCommand,
    SendChatMessageHandler,
};
pub use intake::{
    GetIntakeHandler, GetIntakeQuery, IntakeView, SubmitIntakeCommand, SubmitIntakeHandler,
    SubmitIntakeResult,
};
pub use program::{
    CompleteWeekCommand, CompleteWeekHandler, CompleteWeekResult, ListProgramWeeksHandler,
    ListProgramWeeksQuery, ProgramOverview, WeekOverview,
};
pub use tracking::{
    CurrentStats, Dashboard, GetDashboardHandler, GetDashboardQuery, GetProfileOverviewHandler,
    GetProfileOverviewQuery, ProfileOverview, ProfileStats, SubmitDailyReportCommand,
    SubmitDailyReportHandler,
};
