//! GetCalendarMonth - Query handler for the month grid and its events.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::calendar::{events_on, CalendarMonth, ProgramEvent};
use crate::domain::foundation::DomainError;
use crate::ports::EventRepository;

#[derive(Debug, Clone)]
pub struct GetCalendarMonthQuery {
    pub year: i32,
    pub month: u32,
    pub today: NaiveDate,
    /// Day whose events are listed alongside the grid; defaults to today.
    pub selected: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub grid: CalendarMonth,
    pub events: Vec<ProgramEvent>,
    pub selected_date: NaiveDate,
    pub selected_events: Vec<ProgramEvent>,
}

pub struct GetCalendarMonthHandler {
    events: Arc<dyn EventRepository>,
}

impl GetCalendarMonthHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, query: GetCalendarMonthQuery) -> Result<CalendarView, DomainError> {
        let (from, to) = CalendarMonth::grid_bounds(query.year, query.month)?;
        let events = self.events.list_between(from, to).await?;
        let grid = CalendarMonth::build(query.year, query.month, &events, query.today)?;

        let selected_date = query.selected.unwrap_or(query.today);
        let selected_events = if (from..=to).contains(&selected_date) {
            events_on(&events, selected_date)
        } else {
            self.events.list_between(selected_date, selected_date).await?
        };

        Ok(CalendarView {
            grid,
            events,
            selected_date,
            selected_events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEventRepository;
    use crate::domain::calendar::EventKind;
    use crate::domain::foundation::{ErrorCode, EventId};
    use chrono::NaiveTime;

    fn event(month: u32, day: u32, hour: u32) -> ProgramEvent {
        ProgramEvent {
            id: EventId::new(),
            title: format!("Evento {}/{}", day, month),
            description: None,
            date: NaiveDate::from_ymd_opt(2025, month, day).unwrap(),
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            kind: EventKind::Circle,
            week_number: None,
            location: "Online".into(),
            max_participants: None,
        }
    }

    fn handler() -> GetCalendarMonthHandler {
        GetCalendarMonthHandler::new(Arc::new(InMemoryEventRepository::with_events([
            event(5, 6, 19),
            event(5, 6, 9),
            event(5, 20, 19),
            event(4, 28, 19),
            event(7, 1, 19),
        ])))
    }

    #[tokio::test]
    async fn loads_events_visible_in_grid() {
        let view = handler()
            .handle(GetCalendarMonthQuery {
                year: 2025,
                month: 5,
                today: NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
                selected: None,
            })
            .await
            .unwrap();

        // The May grid starts on Sunday 27 April, so the 28th is visible.
        assert_eq!(view.events.len(), 4);
        assert_eq!(view.grid.cells.iter().filter(|c| c.has_event).count(), 3);
        assert_eq!(view.selected_events.len(), 2);
        assert!(view.selected_events[0].time < view.selected_events[1].time);
    }

    #[tokio::test]
    async fn selected_day_outside_grid_is_loaded_separately() {
        let view = handler()
            .handle(GetCalendarMonthQuery {
                year: 2025,
                month: 5,
                today: NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
                selected: NaiveDate::from_ymd_opt(2025, 7, 1),
            })
            .await
            .unwrap();
        assert_eq!(view.selected_events.len(), 1);
    }

    #[tokio::test]
    async fn invalid_month_is_a_validation_error() {
        let err = handler()
            .handle(GetCalendarMonthQuery {
                year: 2025,
                month: 13,
                today: NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
                selected: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
