//! Calendar module - lessons, support circles and activities.

mod event;
mod month;

pub use event::{events_on, EventAttendance, EventKind, ProgramEvent};
pub use month::{month_bounds, CalendarCell, CalendarMonth, GRID_CELLS};
