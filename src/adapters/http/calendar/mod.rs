//! HTTP adapter for the program calendar.

mod dto;
mod handlers;
mod routes;

pub use dto::{CalendarParams, ListEventsParams};
pub use handlers::CalendarHandlers;
pub use routes::calendar_routes;
