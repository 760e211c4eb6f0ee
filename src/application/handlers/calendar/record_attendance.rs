//! RecordAttendance - Command handler for marking presence at an event.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::calendar::{EventAttendance, EventKind};
use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode, EventId, Timestamp};
use crate::domain::tracking::UserStats;
use crate::ports::{EventRepository, StatsRepository};

#[derive(Debug, Clone)]
pub struct RecordAttendanceCommand {
    pub event_id: EventId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordAttendanceResult {
    pub kind: EventKind,
    /// False when the participant had already been marked present.
    pub newly_recorded: bool,
}

pub struct RecordAttendanceHandler {
    events: Arc<dyn EventRepository>,
    stats: Arc<dyn StatsRepository>,
}

impl RecordAttendanceHandler {
    pub fn new(events: Arc<dyn EventRepository>, stats: Arc<dyn StatsRepository>) -> Self {
        Self { events, stats }
    }

    pub async fn handle(
        &self,
        cmd: RecordAttendanceCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordAttendanceResult, DomainError> {
        let event = self
            .events
            .find_by_id(&cmd.event_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::EventNotFound, "Event not found")
                    .with_detail("event_id", cmd.event_id.to_string())
            })?;

        let now = Timestamp::now();
        let newly_recorded = self
            .events
            .record_attendance(&EventAttendance {
                user_id: metadata.user_id.clone(),
                event_id: event.id,
                attended_at: now,
            })
            .await?;

        if newly_recorded {
            let mut stats = self
                .stats
                .find_by_user(&metadata.user_id)
                .await?
                .unwrap_or_else(|| UserStats::new(metadata.user_id.clone(), None, now));
            stats.record_attendance(event.kind, now);
            self.stats.save(&stats).await?;

            tracing::info!(
                user_id = %metadata.user_id,
                correlation_id = %metadata.correlation_id(),
                event_id = %event.id,
                kind = event.kind.code(),
                "attendance recorded"
            );
        }

        Ok(RecordAttendanceResult {
            kind: event.kind,
            newly_recorded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryEventRepository, InMemoryStatsRepository};
    use crate::domain::calendar::ProgramEvent;
    use crate::domain::foundation::UserId;
    use chrono::{NaiveDate, NaiveTime};

    fn lesson() -> ProgramEvent {
        ProgramEvent {
            id: EventId::new(),
            title: "Aula 1".into(),
            description: None,
            date: NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
            time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            kind: EventKind::Lesson,
            week_number: None,
            location: "Online".into(),
            max_participants: Some(30),
        }
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(UserId::new("u1").unwrap())
    }

    #[tokio::test]
    async fn attendance_counts_once() {
        let event = lesson();
        let stats = Arc::new(InMemoryStatsRepository::new());
        let handler = RecordAttendanceHandler::new(
            Arc::new(InMemoryEventRepository::with_events([event.clone()])),
            stats.clone(),
        );

        let cmd = RecordAttendanceCommand { event_id: event.id };
        let first = handler.handle(cmd.clone(), metadata()).await.unwrap();
        let second = handler.handle(cmd, metadata()).await.unwrap();

        assert!(first.newly_recorded);
        assert!(!second.newly_recorded);
        let saved = stats
            .find_by_user(&UserId::new("u1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(saved.lessons_attended, 1);
        assert_eq!(saved.circles_attended, 0);
    }

    #[tokio::test]
    async fn unknown_event_is_not_found() {
        let handler = RecordAttendanceHandler::new(
            Arc::new(InMemoryEventRepository::new()),
            Arc::new(InMemoryStatsRepository::new()),
        );
        let err = handler
            .handle(
                RecordAttendanceCommand {
                    event_id: EventId::new(),
                },
                metadata(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EventNotFound);
    }
}
