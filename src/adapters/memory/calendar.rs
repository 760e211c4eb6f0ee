//! In-memory calendar events and attendance.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::calendar::{EventAttendance, ProgramEvent};
use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::ports::EventRepository;

#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: RwLock<HashMap<EventId, ProgramEvent>>,
    attendance: RwLock<HashSet<(UserId, EventId)>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: impl IntoIterator<Item = ProgramEvent>) -> Self {
        Self {
            events: RwLock::new(events.into_iter().map(|e| (e.id, e)).collect()),
            attendance: RwLock::new(HashSet::new()),
        }
    }

    pub async fn insert(&self, event: ProgramEvent) {
        self.events.write().await.insert(event.id, event);
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ProgramEvent>, DomainError> {
        let mut events: Vec<_> = self
            .events
            .read()
            .await
            .values()
            .filter(|e| e.date >= from && e.date <= to)
            .cloned()
            .collect();
        events.sort_by_key(|e| (e.date, e.time));
        Ok(events)
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<ProgramEvent>, DomainError> {
        Ok(self.events.read().await.get(id).cloned())
    }

    async fn record_attendance(&self, attendance: &EventAttendance) -> Result<bool, DomainError> {
        Ok(self
            .attendance
            .write()
            .await
            .insert((attendance.user_id.clone(), attendance.event_id)))
    }
}
