//! IntakeRepository port for the clinical anamnesis sections.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::intake::ClinicalIntake;

/// Stores one intake per participant.
#[async_trait]
pub trait IntakeRepository: Send + Sync {
    /// Insert or update every section for the user.
    async fn save(&self, user_id: &UserId, intake: &ClinicalIntake) -> Result<(), DomainError>;

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<ClinicalIntake>, DomainError>;
}
