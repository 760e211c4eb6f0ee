//! PostgreSQL implementation of EventRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::calendar::{EventAttendance, EventKind, ProgramEvent};
use crate::domain::foundation::{DomainError, ErrorCode, EventId};
use crate::domain::program::WeekNumber;
use crate::ports::EventRepository;

use super::rows;

const EVENT_COLUMNS: &str = "id, title, description, event_date, event_time, event_type, \
                             week_number, location, max_participants";

#[derive(Clone)]
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// True when at least one event is scheduled.
    pub async fn has_events(&self) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM events)")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count events", e))
    }

    pub async fn insert(&self, event: &ProgramEvent) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO events (
                id, title, description, event_date, event_time, event_type,
                week_number, location, max_participants
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(event.time)
        .bind(event.kind.code())
        .bind(event.week_number.map(|w| i16::from(w.value())))
        .bind(&event.location)
        .bind(event.max_participants.map(i64::from))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert event", e))?;

        Ok(())
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn list_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ProgramEvent>, DomainError> {
        let found = sqlx::query(&format!(
            "SELECT {} FROM events WHERE event_date BETWEEN $1 AND $2 \
             ORDER BY event_date, event_time",
            EVENT_COLUMNS
        ))
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch events", e))?;

        found.iter().map(row_to_event).collect()
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<ProgramEvent>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM events WHERE id = $1",
            EVENT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch event", e))?;

        row.as_ref().map(row_to_event).transpose()
    }

    async fn record_attendance(&self, attendance: &EventAttendance) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO event_attendance (user_id, event_id, attended_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, event_id) DO NOTHING
            "#,
        )
        .bind(attendance.user_id.as_str())
        .bind(attendance.event_id.as_uuid())
        .bind(attendance.attended_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to record attendance", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_event(row: &PgRow) -> Result<ProgramEvent, DomainError> {
    let id: uuid::Uuid = rows::get(row, "id")?;
    let kind: String = rows::get(row, "event_type")?;
    let week: Option<i16> = rows::get(row, "week_number")?;
    let max_participants: Option<i64> = rows::get(row, "max_participants")?;

    Ok(ProgramEvent {
        id: EventId::from_uuid(id),
        title: rows::get(row, "title")?,
        description: rows::get(row, "description")?,
        date: rows::get(row, "event_date")?,
        time: rows::get(row, "event_time")?,
        kind: EventKind::from_code(&kind).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid event type: {}", kind),
            )
        })?,
        week_number: week
            .map(|w| {
                let value: u8 = rows::counter(i64::from(w), "week_number")?;
                WeekNumber::new(value).map_err(|e| DomainError::database("Invalid week_number", e))
            })
            .transpose()?,
        location: rows::get(row, "location")?,
        max_participants: max_participants
            .map(|m| rows::counter(m, "max_participants"))
            .transpose()?,
    })
}
