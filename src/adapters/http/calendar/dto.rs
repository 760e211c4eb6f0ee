//! DTOs for calendar endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

/// `?date=` selects the day listed under the grid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarParams {
    pub date: Option<NaiveDate>,
}

/// Either `?date=` for one day or `?from=&to=` for a range.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEventsParams {
    pub date: Option<NaiveDate>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
