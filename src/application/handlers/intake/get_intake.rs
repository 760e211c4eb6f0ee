//! GetIntake - Query handler returning a stored intake for pre-filling.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::intake::ClinicalIntake;
use crate::domain::participant::PatientIdentification;
use crate::ports::{IntakeRepository, ProfileRepository};

#[derive(Debug, Clone)]
pub struct GetIntakeQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeView {
    pub identification: Option<PatientIdentification>,
    pub clinical: Option<ClinicalIntake>,
}

pub struct GetIntakeHandler {
    profiles: Arc<dyn ProfileRepository>,
    intakes: Arc<dyn IntakeRepository>,
}

impl GetIntakeHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, intakes: Arc<dyn IntakeRepository>) -> Self {
        Self { profiles, intakes }
    }

    /// `None` when the participant has not started the intake.
    pub async fn handle(&self, query: GetIntakeQuery) -> Result<Option<IntakeView>, DomainError> {
        let identification = self
            .profiles
            .find_by_user(&query.user_id)
            .await?
            .map(|p| p.identification);
        let clinical = self.intakes.find_by_user(&query.user_id).await?;

        if identification.is_none() && clinical.is_none() {
            return Ok(None);
        }
        Ok(Some(IntakeView {
            identification,
            clinical,
        }))
    }
}
