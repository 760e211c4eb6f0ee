//! HTTP handlers for the anamnesis form.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::intake::{
    GetIntakeHandler, GetIntakeQuery, SubmitIntakeCommand, SubmitIntakeHandler,
};
use crate::domain::foundation::CommandMetadata;
use crate::domain::intake::RawIntakeForm;

use super::dto::SubmitIntakeResponse;

#[derive(Clone)]
pub struct IntakeHandlers {
    submit_handler: Arc<SubmitIntakeHandler>,
    get_handler: Arc<GetIntakeHandler>,
}

impl IntakeHandlers {
    pub fn new(submit_handler: Arc<SubmitIntakeHandler>, get_handler: Arc<GetIntakeHandler>) -> Self {
        Self {
            submit_handler,
            get_handler,
        }
    }
}

/// GET /api/intake - The participant's saved anamnesis
pub async fn get_intake(
    State(handlers): State<IntakeHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .get_handler
        .handle(GetIntakeQuery {
            user_id: user.id.clone(),
        })
        .await
    {
        Ok(Some(view)) => (StatusCode::OK, Json(view)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Intake", user.id.as_str())),
        )
            .into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/intake - Submit or resubmit the anamnesis
pub async fn submit_intake(
    State(handlers): State<IntakeHandlers>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<RawIntakeForm>,
) -> Response {
    let cmd = SubmitIntakeCommand {
        form,
        account_email: user.email.clone(),
    };
    let metadata = CommandMetadata::new(user.id);

    match handlers.submit_handler.handle(cmd, metadata).await {
        Ok(result) => {
            let status = if result.first_submission {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(SubmitIntakeResponse::from(result))).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}
