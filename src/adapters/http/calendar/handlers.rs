//! HTTP handlers for the calendar and event attendance.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::calendar::{
    GetCalendarMonthHandler, GetCalendarMonthQuery, ListEventsHandler, ListEventsQuery,
    RecordAttendanceCommand, RecordAttendanceHandler,
};
use crate::domain::foundation::{CommandMetadata, EventId, Timestamp};

use super::dto::{CalendarParams, ListEventsParams};

#[derive(Clone)]
pub struct CalendarHandlers {
    month_handler: Arc<GetCalendarMonthHandler>,
    list_handler: Arc<ListEventsHandler>,
    attendance_handler: Arc<RecordAttendanceHandler>,
}

impl CalendarHandlers {
    pub fn new(
        month_handler: Arc<GetCalendarMonthHandler>,
        list_handler: Arc<ListEventsHandler>,
        attendance_handler: Arc<RecordAttendanceHandler>,
    ) -> Self {
        Self {
            month_handler,
            list_handler,
            attendance_handler,
        }
    }
}

/// GET /api/calendar/:year/:month - Month grid with its events
pub async fn get_month(
    State(handlers): State<CalendarHandlers>,
    RequireAuth(_user): RequireAuth,
    Path((year, month)): Path<(i32, u32)>,
    Query(params): Query<CalendarParams>,
) -> Response {
    let query = GetCalendarMonthQuery {
        year,
        month,
        today: Timestamp::now().date(),
        selected: params.date,
    };

    match handlers.month_handler.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/events - Events on a day or within a range
pub async fn list_events(
    State(handlers): State<CalendarHandlers>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<ListEventsParams>,
) -> Response {
    let query = match (params.date, params.from, params.to) {
        (Some(date), None, None) => ListEventsQuery::on(date),
        (None, Some(from), Some(to)) => ListEventsQuery { from, to },
        (None, None, None) => ListEventsQuery::on(Timestamp::now().date()),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(
                    "Use either 'date' or both 'from' and 'to'",
                )),
            )
                .into_response()
        }
    };

    match handlers.list_handler.handle(query).await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/events/:id/attendance - Mark presence at an event
pub async fn record_attendance(
    State(handlers): State<CalendarHandlers>,
    RequireAuth(user): RequireAuth,
    Path(event_id): Path<String>,
) -> Response {
    let event_id = match event_id.parse::<EventId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid event ID")),
            )
                .into_response()
        }
    };

    match handlers
        .attendance_handler
        .handle(RecordAttendanceCommand { event_id }, CommandMetadata::new(user.id))
        .await
    {
        Ok(result) => {
            let status = if result.newly_recorded {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(result)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}
