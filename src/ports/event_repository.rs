//! EventRepository port for the program calendar.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::calendar::{EventAttendance, ProgramEvent};
use crate::domain::foundation::{DomainError, EventId};

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Events dated within `from..=to`, ordered by date and time.
    async fn list_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ProgramEvent>, DomainError>;

    async fn find_by_id(&self, id: &EventId) -> Result<Option<ProgramEvent>, DomainError>;

    /// Records attendance. Returns `false` when the user was already
    /// recorded for this event.
    async fn record_attendance(&self, attendance: &EventAttendance) -> Result<bool, DomainError>;
}
