//! Scheduled program events and attendance.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, Timestamp, UserId};
use crate::domain::program::WeekNumber;

/// What kind of meeting an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Lesson,
    Circle,
    Activity,
}

impl EventKind {
    /// Stored column value.
    pub fn code(&self) -> &'static str {
        match self {
            EventKind::Lesson => "aula",
            EventKind::Circle => "roda",
            EventKind::Activity => "atividade",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "aula" => Some(EventKind::Lesson),
            "roda" => Some(EventKind::Circle),
            "atividade" => Some(EventKind::Activity),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Lesson => "Aula",
            EventKind::Circle => "Roda de conversa",
            EventKind::Activity => "Atividade",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEvent {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: EventKind,
    pub week_number: Option<WeekNumber>,
    pub location: String,
    pub max_participants: Option<u32>,
}

/// Events on `date`, ordered by start time.
pub fn events_on(events: &[ProgramEvent], date: NaiveDate) -> Vec<ProgramEvent> {
    let mut day: Vec<_> = events.iter().filter(|e| e.date == date).cloned().collect();
    day.sort_by_key(|e| e.time);
    day
}

/// A participant's attendance at one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttendance {
    pub user_id: UserId,
    pub event_id: EventId,
    pub attended_at: Timestamp,
}
