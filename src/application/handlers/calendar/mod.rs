//! Calendar handlers.

mod get_calendar_month;
mod list_events;
mod record_attendance;

pub use get_calendar_month::{CalendarView, GetCalendarMonthHandler, GetCalendarMonthQuery};
pub use list_events::{ListEventsHandler, ListEventsQuery};
pub use record_attendance::{
    RecordAttendanceCommand, RecordAttendanceHandler, RecordAttendanceResult,
};
