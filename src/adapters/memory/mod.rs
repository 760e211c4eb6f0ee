//! In-memory adapters for tests and local runs without a database.

mod calendar;
mod chat;
mod profile;
mod program;
mod seed;
mod tracking;

pub use calendar::InMemoryEventRepository;
pub use chat::InMemoryChatRepository;
pub use profile::{InMemoryIntakeRepository, InMemoryProfileRepository};
pub use program::InMemoryProgramRepository;
pub use seed::{program_weeks, weekly_events};
pub use tracking::{InMemoryDailyReportRepository, InMemoryStatsRepository};
