//! HTTP routes for calendar endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_month, list_events, record_attendance, CalendarHandlers};

/// Mounted at `/api`.
pub fn calendar_routes(handlers: CalendarHandlers) -> Router {
    Router::new()
        .route("/calendar/:year/:month", get(get_month))
        .route("/events", get(list_events))
        .route("/events/:id/attendance", post(record_attendance))
        .with_state(handlers)
}
