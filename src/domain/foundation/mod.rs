//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, authentication and error types that
//! every feature module of the program builds on.

mod auth;
mod command;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChatMessageId, DailyReportId, EventId, UserId};
pub use timestamp::Timestamp;
