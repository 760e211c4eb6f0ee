//! Seed data for in-memory runs.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::domain::calendar::{EventKind, ProgramEvent};
use crate::domain::foundation::{DomainError, ErrorCode, EventId};
use crate::domain::program::{ProgramWeek, WeekNumber, TOTAL_WEEKS};

const PROGRAM_WEEKS_YAML: &str = include_str!("../../../data/program_weeks.yaml");

/// The twelve program weeks bundled with the binary.
pub fn program_weeks() -> Result<Vec<ProgramWeek>, DomainError> {
    let weeks: Vec<ProgramWeek> = serde_yaml::from_str(PROGRAM_WEEKS_YAML).map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Invalid program weeks data: {}", e),
        )
    })?;

    if weeks.len() != usize::from(TOTAL_WEEKS) {
        return Err(DomainError::new(
            ErrorCode::InternalError,
            format!("Expected {} program weeks, found {}", TOTAL_WEEKS, weeks.len()),
        ));
    }
    Ok(weeks)
}

/// One lesson, circle and activity per program week, the first week
/// beginning on `start`. Within a week the lesson is on day 1, the circle
/// on day 3 and the activity on day 5.
pub fn weekly_events(weeks: &[ProgramWeek], start: NaiveDate) -> Vec<ProgramEvent> {
    let evening = NaiveTime::from_hms_opt(19, 0, 0).unwrap_or(NaiveTime::MIN);
    let morning = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN);

    weeks
        .iter()
        .flat_map(|week| {
            let offset = i64::from(week.week_number.value() - 1) * 7;
            let base = start + Duration::days(offset);
            [
                (EventKind::Lesson, week.lesson.clone(), 1, evening),
                (EventKind::Circle, week.circle.clone(), 3, evening),
                (EventKind::Activity, week.activity.clone(), 5, morning),
            ]
            .into_iter()
            .map(move |(kind, title, day, time)| {
                event(week.week_number, kind, title, base + Duration::days(day), time)
            })
        })
        .collect()
}

fn event(
    week_number: WeekNumber,
    kind: EventKind,
    title: String,
    date: NaiveDate,
    time: NaiveTime,
) -> ProgramEvent {
    ProgramEvent {
        id: EventId::new(),
        title,
        description: Some(format!("{} da semana {}", kind.label(), week_number)),
        date,
        time,
        kind,
        week_number: Some(week_number),
        location: "Online".to_string(),
        max_participants: match kind {
            EventKind::Circle => Some(20),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_weeks_parse_in_order() {
        let weeks = program_weeks().unwrap();
        assert_eq!(weeks.len(), 12);
        for (i, week) in weeks.iter().enumerate() {
            assert_eq!(usize::from(week.week_number.value()), i + 1);
            assert!(!week.tips.is_empty());
        }
        assert_eq!(weeks[0].lesson, "Como o vício age no cérebro");
    }

    #[test]
    fn bundled_weeks_match_their_phase() {
        for week in program_weeks().unwrap() {
            assert_eq!(week.theme, week.phase().title());
        }
    }

    #[test]
    fn three_events_per_week() {
        let weeks = program_weeks().unwrap();
        let start = NaiveDate::from_ymd_opt(2025, 5, 4).unwrap();
        let events = weekly_events(&weeks, start);
        assert_eq!(events.len(), 36);
        assert_eq!(events[0].kind, EventKind::Lesson);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2025, 5, 5).unwrap());
        assert_eq!(events[3].week_number, WeekNumber::new(2).ok());
    }
}
