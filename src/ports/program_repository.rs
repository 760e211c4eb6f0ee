//! ProgramRepository port for program content and per-user progress.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::program::{ProgramEnrollment, ProgramWeek};

#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// All program weeks, ordered by week number.
    async fn list_weeks(&self) -> Result<Vec<ProgramWeek>, DomainError>;

    async fn find_enrollment(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ProgramEnrollment>, DomainError>;

    /// Persist every progress row of the enrollment.
    async fn save_enrollment(&self, enrollment: &ProgramEnrollment) -> Result<(), DomainError>;
}
