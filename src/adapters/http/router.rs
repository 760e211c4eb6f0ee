//! Top-level HTTP router: feature routers under `/api`, liveness probe,
//! and the shared tower-http layers.

use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use serde_json::json;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::websocket::WebSocketState;
use crate::config::ServerConfig;

use super::assessment::{assessment_routes, AssessmentHandlers};
use super::calendar::{calendar_routes, CalendarHandlers};
use super::chat::{chat_routes, ChatHandlers};
use super::intake::{intake_routes, IntakeHandlers};
use super::middleware::{auth_middleware, AuthState};
use super::program::{program_routes, ProgramHandlers};
use super::tracking::{tracking_routes, TrackingHandlers};

/// Handler state for every feature router.
#[derive(Clone)]
pub struct ApiHandlers {
    pub assessment: AssessmentHandlers,
    pub intake: IntakeHandlers,
    pub tracking: TrackingHandlers,
    pub program: ProgramHandlers,
    pub calendar: CalendarHandlers,
    pub chat: ChatHandlers,
    pub live: WebSocketState,
}

/// Routes under `/api`, wrapped in the auth middleware.
pub fn api_routes(handlers: ApiHandlers, auth: AuthState) -> Router {
    Router::new()
        .nest("/assessment", assessment_routes(handlers.assessment))
        .nest("/intake", intake_routes(handlers.intake))
        .nest("/program", program_routes(handlers.program))
        .nest("/chat", chat_routes(handlers.chat, handlers.live))
        .merge(tracking_routes(handlers.tracking))
        .merge(calendar_routes(handlers.calendar))
        .layer(middleware::from_fn_with_state(auth, auth_middleware))
}

/// Full application router.
pub fn app_router(handlers: ApiHandlers, auth: AuthState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes(handlers, auth))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Configured origins when given; otherwise permissive outside
/// production and same-origin only in production.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    } else if server.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    }
}
