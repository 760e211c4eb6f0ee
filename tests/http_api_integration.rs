//! Integration tests for the HTTP API.
//!
//! The full router runs over in-memory repositories with a mock session
//! validator, so every request goes through routing, the auth middleware,
//! the application handlers and the JSON mapping.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use smokefree::adapters::auth::MockSessionValidator;
use smokefree::adapters::http::middleware::AuthState;
use smokefree::adapters::memory::{program_weeks, weekly_events};
use smokefree::app::{build_router, Repositories};
use smokefree::config::{ProgramConfig, ServerConfig};

// =============================================================================
// Test Infrastructure
// =============================================================================

const TOKEN: &str = "token-maria";
const OTHER_TOKEN: &str = "token-joao";

fn schedule_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

fn app() -> Router {
    let weeks = program_weeks().unwrap();
    let events = weekly_events(&weeks, schedule_start());
    let repos = Repositories::in_memory(weeks, events);
    let auth: AuthState = Arc::new(
        MockSessionValidator::new()
            .with_test_user(TOKEN, "user-maria")
            .with_test_user(OTHER_TOKEN, "user-joao"),
    );
    build_router(
        &repos,
        auth,
        &ServerConfig::default(),
        &ProgramConfig::default(),
    )
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn post(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn heaviest_answers() -> Value {
    json!({
        "minutes_to_first_use": "≤ 5 min",
        "difficulty_abstaining_in_forbidden_places": true,
        "most_missed_cigarette": "O primeiro da manhã",
        "cigarettes_per_day": "31 ou mais",
        "smokes_more_in_morning": true,
        "smokes_when_ill": true
    })
}

fn intake_form() -> Value {
    json!({
        "identification": {
            "full_name": "Maria da Silva",
            "birth_date": "14/02/1980",
            "sex": "Feminino"
        },
        "smoking": {
            "current_per_day": "20",
            "has_tried_quitting": "Sim",
            "quit_attempts": "2"
        },
        "health": {
            "consumes_caffeine": "Sim"
        },
        "motivation": {
            "main_reason": "Saúde",
            "motivation_level": "8",
            "desired_quit_date": "01/03/2025"
        },
        "fagerstrom": heaviest_answers()
    })
}

// =============================================================================
// Health and Auth
// =============================================================================

#[tokio::test]
async fn health_is_public() {
    let (status, body) = send(&app(), get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = app();
    for uri in ["/api/dashboard", "/api/intake", "/api/program/weeks", "/api/chat/messages"] {
        let (status, _) = send(&app, get(uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let (status, body) = send(&app(), get("/api/dashboard", Some("nope"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH_ERROR");
}

// =============================================================================
// Assessment
// =============================================================================

#[tokio::test]
async fn preview_score_needs_no_account() {
    let (status, body) = send(
        &app(),
        post("/api/assessment/preview", None, heaviest_answers()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"]["points"], 10);
    assert_eq!(body["score"]["level"], "high");
    assert_eq!(body["complete"], true);
}

#[tokio::test]
async fn preview_of_empty_answers_scores_zero() {
    let (status, body) = send(&app(), post("/api/assessment/preview", None, json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"]["points"], 0);
    assert_eq!(body["score"]["level"], "low");
    assert_eq!(body["complete"], false);
}

#[tokio::test]
async fn preview_ignores_numeric_and_array_answers() {
    let answers = json!({
        "smokes_when_ill": 1,
        "minutes_to_first_use": 5,
        "cigarettes_per_day": [1, 2]
    });
    let (status, body) = send(&app(), post("/api/assessment/preview", None, answers)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"]["points"], 0);
    assert_eq!(body["complete"], false);
}

// =============================================================================
// Intake
// =============================================================================

#[tokio::test]
async fn intake_is_not_found_before_submission() {
    let (status, _) = send(&app(), get("/api/intake", Some(TOKEN))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn first_intake_submission_creates_then_resubmission_updates() {
    let app = app();

    let (status, body) = send(&app, post("/api/intake", Some(TOKEN), intake_form())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["first_submission"], true);
    assert_eq!(body["score"]["points"], 10);

    let (status, body) = send(&app, post("/api/intake", Some(TOKEN), intake_form())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_submission"], false);

    let (status, _) = send(&app, get("/api/intake", Some(TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn intake_scores_numeric_fagerstrom_answer_as_no() {
    let mut form = intake_form();
    form["fagerstrom"]["smokes_when_ill"] = json!(1);

    let (status, body) = send(&app(), post("/api/intake", Some(TOKEN), form)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["score"]["points"], 9);
}

#[tokio::test]
async fn intake_with_malformed_date_is_a_bad_request() {
    let mut form = intake_form();
    form["motivation"]["desired_quit_date"] = json!("31/02/2025");

    let (status, body) = send(&app(), post("/api/intake", Some(TOKEN), form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

// =============================================================================
// Dashboard and Profile
// =============================================================================

#[tokio::test]
async fn dashboard_reflects_quit_date_and_baseline() {
    let app = app();
    send(&app, post("/api/intake", Some(TOKEN), intake_form())).await;

    let (status, body) = send(&app, get("/api/dashboard?date=2025-03-11", Some(TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Maria");
    assert_eq!(body["stats"]["days_smoke_free"], 10);
    assert_eq!(body["stats"]["cigarettes_not_smoked"], 200);
    assert_eq!(body["stats"]["money_saved_cents"], 10_000);
    assert_eq!(body["program"]["current_week"], 1);
}

#[tokio::test]
async fn dashboard_lists_the_days_events() {
    let app = app();
    send(&app, post("/api/intake", Some(TOKEN), intake_form())).await;

    // Week 1 lesson falls on day 1 after the schedule start.
    let (_, body) = send(&app, get("/api/dashboard?date=2025-03-04", Some(TOKEN))).await;

    let events = body["today_events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["kind"], "lesson");
}

#[tokio::test]
async fn profile_overview_uses_the_intake_name_and_email() {
    let app = app();
    send(&app, post("/api/intake", Some(TOKEN), intake_form())).await;

    let (status, body) = send(&app, get("/api/profile?date=2025-03-11", Some(TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display_name"], "Maria da Silva");
    assert_eq!(body["motivation_level"], 8);
    assert_eq!(body["days_smoke_free"], 10);
}

#[tokio::test]
async fn daily_report_is_saved_once_per_day() {
    let app = app();
    let report = json!({
        "date": "2025-03-05",
        "symptoms": ["Ansiedade", "Tosse"],
        "mood_level": 3,
        "craving_level": 4
    });

    let (status, _) = send(&app, post("/api/reports", Some(TOKEN), report.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, post("/api/reports", Some(TOKEN), report)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn daily_report_with_unknown_symptom_is_rejected() {
    let report = json!({ "date": "2025-03-05", "symptoms": ["Espirros"] });
    let (status, _) = send(&app(), post("/api/reports", Some(TOKEN), report)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Program
// =============================================================================

#[tokio::test]
async fn program_lists_twelve_weeks_with_first_current() {
    let app = app();
    send(&app, post("/api/intake", Some(TOKEN), intake_form())).await;

    let (status, body) = send(&app, get("/api/program/weeks", Some(TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    let weeks = body["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 12);
    assert_eq!(weeks[0]["status"], "current");
    assert_eq!(weeks[1]["status"], "locked");
}

#[tokio::test]
async fn completing_current_week_advances_and_locked_week_conflicts() {
    let app = app();
    send(&app, post("/api/intake", Some(TOKEN), intake_form())).await;

    let (status, body) = send(
        &app,
        post("/api/program/weeks/1/complete", Some(TOKEN), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["newly_completed"], true);
    assert_eq!(body["next_current_week"], 2);

    let (status, body) = send(
        &app,
        post("/api/program/weeks/5/complete", Some(TOKEN), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "WEEK_LOCKED");
}

#[tokio::test]
async fn week_outside_program_is_a_bad_request() {
    let (status, _) = send(
        &app(),
        post("/api/program/weeks/13/complete", Some(TOKEN), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Calendar
// =============================================================================

#[tokio::test]
async fn calendar_month_marks_event_days() {
    let (status, body) = send(
        &app(),
        get("/api/calendar/2025/3?date=2025-03-04", Some(TOKEN)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let cells = body["grid"]["cells"].as_array().unwrap();
    assert_eq!(cells.len() % 7, 0);
    let lesson_day = cells
        .iter()
        .find(|c| c["date"] == "2025-03-04")
        .unwrap();
    assert_eq!(lesson_day["has_event"], true);
    assert_eq!(body["selected_events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_month_is_a_bad_request() {
    let (status, _) = send(&app(), get("/api/calendar/2025/13", Some(TOKEN))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn attendance_is_recorded_once() {
    let app = app();
    let (_, events) = send(&app, get("/api/events?date=2025-03-06", Some(TOKEN))).await;
    let circle_id = events[0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/events/{}/attendance", circle_id);

    let (status, body) = send(&app, post(&uri, Some(TOKEN), json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["newly_recorded"], true);

    let (status, body) = send(&app, post(&uri, Some(TOKEN), json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["newly_recorded"], false);
}

#[tokio::test]
async fn attendance_for_unknown_event_is_not_found() {
    let uri = format!("/api/events/{}/attendance", uuid::Uuid::new_v4());
    let (status, body) = send(&app(), post(&uri, Some(TOKEN), json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EVENT_NOT_FOUND");
}

#[tokio::test]
async fn event_range_must_be_ordered() {
    let (status, _) = send(
        &app(),
        get("/api/events?from=2025-03-10&to=2025-03-01", Some(TOKEN)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Chat
// =============================================================================

#[tokio::test]
async fn chat_history_marks_own_messages_per_viewer() {
    let app = app();
    send(&app, post("/api/intake", Some(TOKEN), intake_form())).await;

    let (status, sent) = send(
        &app,
        post("/api/chat/messages", Some(TOKEN), json!({ "message": "  Dia 10 sem fumar!  " })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(sent["body"], "Dia 10 sem fumar!");
    assert_eq!(sent["is_own"], true);

    let (_, mine) = send(&app, get("/api/chat/messages", Some(TOKEN))).await;
    assert_eq!(mine[0]["is_own"], true);
    assert_eq!(mine[0]["author_name"], "Maria da Silva");

    let (_, theirs) = send(&app, get("/api/chat/messages", Some(OTHER_TOKEN))).await;
    assert_eq!(theirs[0]["is_own"], false);
}

#[tokio::test]
async fn blank_chat_message_is_rejected() {
    let (status, _) = send(
        &app(),
        post("/api/chat/messages", Some(TOKEN), json!({ "message": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
