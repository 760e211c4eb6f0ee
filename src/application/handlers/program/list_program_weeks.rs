//! ListProgramWeeks - Query handler for the program screen.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::program::{ProgramEnrollment, ProgramProgress, ProgramWeek, WeekStatus};
use crate::ports::ProgramRepository;

#[derive(Debug, Clone)]
pub struct ListProgramWeeksQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekOverview {
    pub week: ProgramWeek,
    pub status: WeekStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramOverview {
    pub progress: ProgramProgress,
    pub weeks: Vec<WeekOverview>,
}

pub struct ListProgramWeeksHandler {
    program: Arc<dyn ProgramRepository>,
}

impl ListProgramWeeksHandler {
    pub fn new(program: Arc<dyn ProgramRepository>) -> Self {
        Self { program }
    }

    /// Participants without progress rows see a fresh enrollment.
    pub async fn handle(&self, query: ListProgramWeeksQuery) -> Result<ProgramOverview, DomainError> {
        let weeks = self.program.list_weeks().await?;
        let enrollment = self
            .program
            .find_enrollment(&query.user_id)
            .await?
            .unwrap_or_else(|| ProgramEnrollment::start(query.user_id.clone()));

        let weeks = weeks
            .into_iter()
            .map(|week| WeekOverview {
                status: enrollment.status_of(week.week_number),
                week,
            })
            .collect();

        Ok(ProgramOverview {
            progress: enrollment.progress(),
            weeks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{program_weeks, InMemoryProgramRepository};

    #[tokio::test]
    async fn new_participant_sees_week_one_current_and_rest_locked() {
        let handler = ListProgramWeeksHandler::new(Arc::new(InMemoryProgramRepository::new(
            program_weeks().unwrap(),
        )));
        let overview = handler
            .handle(ListProgramWeeksQuery {
                user_id: UserId::new("u1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(overview.weeks.len(), 12);
        assert_eq!(overview.weeks[0].status, WeekStatus::Current);
        assert!(overview.weeks[1..]
            .iter()
            .all(|w| w.status == WeekStatus::Locked));
        assert_eq!(overview.progress.percent_complete, 0);
    }
}
