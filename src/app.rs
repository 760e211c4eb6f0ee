//! Composition root.
//!
//! Builds the repositories (PostgreSQL or in-memory), the application
//! handlers on top of them, and the HTTP router that exposes them.

use std::sync::Arc;

use axum::Router;
use chrono::NaiveDate;
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use crate::adapters::http::assessment::AssessmentHandlers;
use crate::adapters::http::calendar::CalendarHandlers;
use crate::adapters::http::chat::ChatHandlers;
use crate::adapters::http::intake::IntakeHandlers;
use crate::adapters::http::middleware::AuthState;
use crate::adapters::http::program::ProgramHandlers;
use crate::adapters::http::tracking::TrackingHandlers;
use crate::adapters::http::{app_router, ApiHandlers};
use crate::adapters::memory::{
    weekly_events, InMemoryChatRepository, InMemoryDailyReportRepository,
    InMemoryEventRepository, InMemoryIntakeRepository, InMemoryProfileRepository,
    InMemoryProgramRepository, InMemoryStatsRepository,
};
use crate::adapters::postgres::{
    PostgresChatRepository, PostgresDailyReportRepository, PostgresEventRepository,
    PostgresIntakeRepository, PostgresProfileRepository, PostgresProgramRepository,
    PostgresStatsRepository,
};
use crate::adapters::websocket::{ChatRoom, WebSocketState};
use crate::application::handlers::{
    CompleteWeekHandler, CurrentStats, GetCalendarMonthHandler, GetDashboardHandler,
    GetIntakeHandler, GetProfileOverviewHandler, ListChatMessagesHandler, ListEventsHandler,
    ListProgramWeeksHandler, PreviewScoreHandler, RecordAttendanceHandler,
    SendChatMessageHandler, SubmitDailyReportHandler, SubmitIntakeHandler,
};
use crate::config::{ConfigError, DatabaseConfig, ProgramConfig, ServerConfig, ValidationError};
use crate::domain::calendar::ProgramEvent;
use crate::domain::foundation::DomainError;
use crate::domain::program::ProgramWeek;
use crate::ports::{
    ChatBroadcaster, ChatRepository, DailyReportRepository, EventRepository, IntakeRepository,
    ProfileRepository, ProgramRepository, StatsRepository,
};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("seeding failed: {0}")]
    Seed(#[from] DomainError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Every repository port the handlers depend on.
#[derive(Clone)]
pub struct Repositories {
    pub profiles: Arc<dyn ProfileRepository>,
    pub intakes: Arc<dyn IntakeRepository>,
    pub program: Arc<dyn ProgramRepository>,
    pub stats: Arc<dyn StatsRepository>,
    pub reports: Arc<dyn DailyReportRepository>,
    pub events: Arc<dyn EventRepository>,
    pub chat: Arc<dyn ChatRepository>,
}

impl Repositories {
    /// In-process store preloaded with program content and events.
    pub fn in_memory(weeks: Vec<ProgramWeek>, events: Vec<ProgramEvent>) -> Self {
        Self {
            profiles: Arc::new(InMemoryProfileRepository::new()),
            intakes: Arc::new(InMemoryIntakeRepository::new()),
            program: Arc::new(InMemoryProgramRepository::new(weeks)),
            stats: Arc::new(InMemoryStatsRepository::new()),
            reports: Arc::new(InMemoryDailyReportRepository::new()),
            events: Arc::new(InMemoryEventRepository::with_events(events)),
            chat: Arc::new(InMemoryChatRepository::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
            intakes: Arc::new(PostgresIntakeRepository::new(pool.clone())),
            program: Arc::new(PostgresProgramRepository::new(pool.clone())),
            stats: Arc::new(PostgresStatsRepository::new(pool.clone())),
            reports: Arc::new(PostgresDailyReportRepository::new(pool.clone())),
            events: Arc::new(PostgresEventRepository::new(pool.clone())),
            chat: Arc::new(PostgresChatRepository::new(pool)),
        }
    }
}

/// Connects, migrates, and seeds program content.
///
/// Weeks are upserted on every start; events are generated from
/// `schedule_start` only when the table is empty.
pub async fn connect_postgres(
    config: &DatabaseConfig,
    weeks: &[ProgramWeek],
    schedule_start: NaiveDate,
) -> Result<PgPool, StartupError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(&config.url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    PostgresProgramRepository::new(pool.clone())
        .seed_weeks(weeks)
        .await?;

    let events = PostgresEventRepository::new(pool.clone());
    if !events.has_events().await? {
        let generated = weekly_events(weeks, schedule_start);
        for event in &generated {
            events.insert(event).await?;
        }
        tracing::info!(count = generated.len(), start = %schedule_start, "program events seeded");
    }

    Ok(pool)
}

/// Wires application handlers over `repos` and mounts them on the router.
pub fn build_router(
    repos: &Repositories,
    auth: AuthState,
    server: &ServerConfig,
    program: &ProgramConfig,
) -> Router {
    let room: Arc<dyn ChatBroadcaster> = Arc::new(ChatRoom::with_default_capacity());
    let current_stats = Arc::new(CurrentStats::new(
        repos.stats.clone(),
        repos.intakes.clone(),
        program.pricing(),
    ));

    let handlers = ApiHandlers {
        assessment: AssessmentHandlers::new(Arc::new(PreviewScoreHandler::new())),
        intake: IntakeHandlers::new(
            Arc::new(SubmitIntakeHandler::new(
                repos.profiles.clone(),
                repos.intakes.clone(),
                repos.program.clone(),
                repos.stats.clone(),
            )),
            Arc::new(GetIntakeHandler::new(
                repos.profiles.clone(),
                repos.intakes.clone(),
            )),
        ),
        tracking: TrackingHandlers::new(
            Arc::new(GetDashboardHandler::new(
                repos.profiles.clone(),
                repos.program.clone(),
                repos.events.clone(),
                repos.reports.clone(),
                current_stats.clone(),
            )),
            Arc::new(GetProfileOverviewHandler::new(
                repos.profiles.clone(),
                current_stats,
            )),
            Arc::new(SubmitDailyReportHandler::new(repos.reports.clone())),
        ),
        program: ProgramHandlers::new(
            Arc::new(ListProgramWeeksHandler::new(repos.program.clone())),
            Arc::new(CompleteWeekHandler::new(repos.program.clone())),
        ),
        calendar: CalendarHandlers::new(
            Arc::new(GetCalendarMonthHandler::new(repos.events.clone())),
            Arc::new(ListEventsHandler::new(repos.events.clone())),
            Arc::new(RecordAttendanceHandler::new(
                repos.events.clone(),
                repos.stats.clone(),
            )),
        ),
        chat: ChatHandlers::new(
            Arc::new(ListChatMessagesHandler::new(
                repos.chat.clone(),
                repos.profiles.clone(),
                program.chat_history_limit,
            )),
            Arc::new(SendChatMessageHandler::new(
                repos.chat.clone(),
                repos.profiles.clone(),
                room.clone(),
                program.chat_max_chars,
            )),
        ),
        live: WebSocketState::new(room),
    };

    app_router(handlers, auth, server)
}
