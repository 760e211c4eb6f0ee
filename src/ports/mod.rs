//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ProfileRepository` - Participant identification
//! - `IntakeRepository` - Clinical anamnesis sections
//! - `ProgramRepository` - Program weeks and per-user progress
//! - `StatsRepository` - Smoke-free counters
//! - `DailyReportRepository` - Daily symptom reports
//! - `EventRepository` - Calendar events and attendance
//! - `ChatRepository` - Community messages
//!
//! ## Other Ports
//!
//! - `SessionValidator` - Bearer token validation
//! - `ChatBroadcaster` - Live fan-out of chat messages

mod chat_broadcaster;
mod chat_repository;
mod daily_report_repository;
mod event_repository;
mod intake_repository;
mod profile_repository;
mod program_repository;
mod session_validator;
mod stats_repository;

pub use chat_broadcaster::ChatBroadcaster;
pub use chat_repository::ChatRepository;
pub use daily_report_repository::DailyReportRepository;
pub use event_repository::EventRepository;
pub use intake_repository::IntakeRepository;
pub use profile_repository::ProfileRepository;
pub use program_repository::ProgramRepository;
pub use session_validator::SessionValidator;
pub use stats_repository::StatsRepository;
