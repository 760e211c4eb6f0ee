//! In-memory program content and progress.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::program::{ProgramEnrollment, ProgramWeek};
use crate::ports::ProgramRepository;

#[derive(Debug, Default)]
pub struct InMemoryProgramRepository {
    weeks: Vec<ProgramWeek>,
    enrollments: RwLock<HashMap<UserId, ProgramEnrollment>>,
}

impl InMemoryProgramRepository {
    pub fn new(mut weeks: Vec<ProgramWeek>) -> Self {
        weeks.sort_by_key(|w| w.week_number);
        Self {
            weeks,
            enrollments: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ProgramRepository for InMemoryProgramRepository {
    async fn list_weeks(&self) -> Result<Vec<ProgramWeek>, DomainError> {
        Ok(self.weeks.clone())
    }

    async fn find_enrollment(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ProgramEnrollment>, DomainError> {
        Ok(self.enrollments.read().await.get(user_id).cloned())
    }

    async fn save_enrollment(&self, enrollment: &ProgramEnrollment) -> Result<(), DomainError> {
        self.enrollments
            .write()
            .await
            .insert(enrollment.user_id().clone(), enrollment.clone());
        Ok(())
    }
}
