//! CompleteWeek - Command handler marking a program week as done.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp};
use crate::domain::program::{ProgramEnrollment, ProgramProgress, WeekCompletion, WeekNumber};
use crate::ports::ProgramRepository;

#[derive(Debug, Clone)]
pub struct CompleteWeekCommand {
    pub week: WeekNumber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteWeekResult {
    pub completion: WeekCompletion,
    pub progress: ProgramProgress,
}

pub struct CompleteWeekHandler {
    program: Arc<dyn ProgramRepository>,
}

impl CompleteWeekHandler {
    pub fn new(program: Arc<dyn ProgramRepository>) -> Self {
        Self { program }
    }

    pub async fn handle(
        &self,
        cmd: CompleteWeekCommand,
        metadata: CommandMetadata,
    ) -> Result<CompleteWeekResult, DomainError> {
        let user_id = &metadata.user_id;
        let mut enrollment = self
            .program
            .find_enrollment(user_id)
            .await?
            .unwrap_or_else(|| ProgramEnrollment::start(user_id.clone()));

        let completion = enrollment.complete(cmd.week, Timestamp::now())?;
        if let WeekCompletion::Completed { next_current } = completion {
            self.program.save_enrollment(&enrollment).await?;
            tracing::info!(
                user_id = %user_id,
                correlation_id = %metadata.correlation_id(),
                week = cmd.week.value(),
                next_current = next_current.map(|w| w.value()),
                "program week completed"
            );
        }

        Ok(CompleteWeekResult {
            completion,
            progress: enrollment.progress(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProgramRepository;
    use crate::domain::foundation::{ErrorCode, UserId};

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(UserId::new("u1").unwrap())
    }

    fn week(n: u8) -> WeekNumber {
        WeekNumber::new(n).unwrap()
    }

    #[tokio::test]
    async fn completing_current_week_is_persisted() {
        let repo = Arc::new(InMemoryProgramRepository::new(vec![]));
        let handler = CompleteWeekHandler::new(repo.clone());

        let result = handler
            .handle(CompleteWeekCommand { week: week(1) }, metadata())
            .await
            .unwrap();
        assert_eq!(result.progress.completed_weeks, 1);
        assert_eq!(result.progress.current_week, week(2));

        let stored = repo
            .find_enrollment(&metadata().user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.progress().current_week, week(2));
    }

    #[tokio::test]
    async fn repeated_completion_is_idempotent() {
        let handler = CompleteWeekHandler::new(Arc::new(InMemoryProgramRepository::new(vec![])));
        handler
            .handle(CompleteWeekCommand { week: week(1) }, metadata())
            .await
            .unwrap();
        let again = handler
            .handle(CompleteWeekCommand { week: week(1) }, metadata())
            .await
            .unwrap();
        assert_eq!(again.completion, WeekCompletion::AlreadyCompleted);
        assert_eq!(again.progress.completed_weeks, 1);
    }

    #[tokio::test]
    async fn locked_week_is_rejected() {
        let handler = CompleteWeekHandler::new(Arc::new(InMemoryProgramRepository::new(vec![])));
        let err = handler
            .handle(CompleteWeekCommand { week: week(5) }, metadata())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::WeekLocked);
    }
}
