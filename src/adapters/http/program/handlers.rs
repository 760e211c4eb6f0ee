//! HTTP handlers for program weeks.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::program::{
    CompleteWeekCommand, CompleteWeekHandler, ListProgramWeeksHandler, ListProgramWeeksQuery,
};
use crate::domain::foundation::CommandMetadata;
use crate::domain::program::WeekNumber;

use super::dto::CompleteWeekResponse;

#[derive(Clone)]
pub struct ProgramHandlers {
    list_handler: Arc<ListProgramWeeksHandler>,
    complete_handler: Arc<CompleteWeekHandler>,
}

impl ProgramHandlers {
    pub fn new(
        list_handler: Arc<ListProgramWeeksHandler>,
        complete_handler: Arc<CompleteWeekHandler>,
    ) -> Self {
        Self {
            list_handler,
            complete_handler,
        }
    }
}

/// GET /api/program/weeks - All weeks with the participant's status
pub async fn list_weeks(
    State(handlers): State<ProgramHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .list_handler
        .handle(ListProgramWeeksQuery { user_id: user.id })
        .await
    {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/program/weeks/:week/complete - Mark a week done
pub async fn complete_week(
    State(handlers): State<ProgramHandlers>,
    RequireAuth(user): RequireAuth,
    Path(week): Path<u8>,
) -> Response {
    let week = match WeekNumber::new(week) {
        Ok(week) => week,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    match handlers
        .complete_handler
        .handle(CompleteWeekCommand { week }, CommandMetadata::new(user.id))
        .await
    {
        Ok(result) => (StatusCode::OK, Json(CompleteWeekResponse::from(result))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
