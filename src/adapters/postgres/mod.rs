//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresProfileRepository` / `PostgresIntakeRepository` - Participant and anamnesis
//! - `PostgresProgramRepository` - Program weeks and per-user progress
//! - `PostgresStatsRepository` / `PostgresDailyReportRepository` - Tracking
//! - `PostgresEventRepository` - Calendar events and attendance
//! - `PostgresChatRepository` - Community chat history
//!
//! The schema lives in `migrations/` and is applied at startup.

mod calendar_repository;
mod chat_repository;
mod profile_repository;
mod program_repository;
mod rows;
mod tracking_repository;

pub use calendar_repository::PostgresEventRepository;
pub use chat_repository::PostgresChatRepository;
pub use profile_repository::{PostgresIntakeRepository, PostgresProfileRepository};
pub use program_repository::PostgresProgramRepository;
pub use tracking_repository::{PostgresDailyReportRepository, PostgresStatsRepository};
