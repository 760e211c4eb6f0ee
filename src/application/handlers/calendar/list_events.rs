//! ListEvents - Query handler for events in a date range.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::calendar::ProgramEvent;
use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::EventRepository;

/// Inclusive range; a single day when `from == to`.
#[derive(Debug, Clone)]
pub struct ListEventsQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ListEventsQuery {
    pub fn on(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }
}

pub struct ListEventsHandler {
    events: Arc<dyn EventRepository>,
}

impl ListEventsHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Events ordered by date then time.
    pub async fn handle(&self, query: ListEventsQuery) -> Result<Vec<ProgramEvent>, DomainError> {
        if query.to < query.from {
            return Err(ValidationError::invalid_format("to", "must not be before 'from'").into());
        }
        self.events.list_between(query.from, query.to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{program_weeks, weekly_events, InMemoryEventRepository};
    use crate::domain::foundation::ErrorCode;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    fn handler() -> ListEventsHandler {
        let weeks = program_weeks().unwrap();
        let events = weekly_events(&weeks, start());
        ListEventsHandler::new(Arc::new(InMemoryEventRepository::with_events(events)))
    }

    #[tokio::test]
    async fn first_week_has_three_events_in_order() {
        let handler = handler();
        let events = handler
            .handle(ListEventsQuery {
                from: start(),
                to: start() + chrono::Duration::days(6),
            })
            .await
            .unwrap();

        assert_eq!(events.len(), 3);
        assert!(events.windows(2).all(|w| (w[0].date, w[0].time) <= (w[1].date, w[1].time)));
    }

    #[tokio::test]
    async fn single_day_lookup() {
        let handler = handler();
        let events = handler
            .handle(ListEventsQuery::on(start() + chrono::Duration::days(1)))
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn reversed_range_is_rejected() {
        let handler = handler();
        let err = handler
            .handle(ListEventsQuery {
                from: start(),
                to: start() - chrono::Duration::days(1),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
