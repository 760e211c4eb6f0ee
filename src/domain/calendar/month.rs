//! Month grid for the calendar screen.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::event::ProgramEvent;

/// Six rows of seven days.
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day: u32,
    pub has_event: bool,
    pub is_today: bool,
    pub is_current_month: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

/// First and last day of a month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ValidationError::out_of_range("month", 1, 12, i64::from(month)))?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| ValidationError::invalid_format("year", "outside supported range"))?;

    Ok((first, next_first - Duration::days(1)))
}

impl CalendarMonth {
    /// Builds the grid starting on the Sunday on or before the 1st.
    pub fn build(
        year: i32,
        month: u32,
        events: &[ProgramEvent],
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let (first, _) = month_bounds(year, month)?;
        let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));

        let cells = start
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| CalendarCell {
                date,
                day: date.day(),
                has_event: events.iter().any(|e| e.date == date),
                is_today: date == today,
                is_current_month: date.month() == month && date.year() == year,
            })
            .collect();

        Ok(Self { year, month, cells })
    }

    /// Grid range, for loading the events it can show.
    pub fn grid_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), ValidationError> {
        let (first, _) = month_bounds(year, month)?;
        let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
        Ok((start, start + Duration::days(GRID_CELLS as i64 - 1)))
    }
}
