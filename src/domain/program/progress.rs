//! A participant's progress through the program weeks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};

use super::week::{WeekNumber, TOTAL_WEEKS};

/// Per-week progress row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub week_number: WeekNumber,
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
    pub current_week: bool,
}

impl UserProgress {
    fn current(week_number: WeekNumber) -> Self {
        Self {
            week_number,
            completed: false,
            completed_at: None,
            current_week: true,
        }
    }
}

/// How a week looks to a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStatus {
    Completed,
    Current,
    /// Ahead of the current week.
    Locked,
    /// Before the current week but not marked complete.
    Available,
}

/// Summary counters over the progress rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramProgress {
    pub completed_weeks: u8,
    pub current_week: WeekNumber,
    pub total_weeks: u8,
    pub percent_complete: u8,
}

impl ProgramProgress {
    /// Current week is the first row flagged current, or week 1.
    pub fn from_rows(rows: &[UserProgress]) -> Self {
        let completed_weeks = rows.iter().filter(|r| r.completed).count() as u8;
        let current_week = rows
            .iter()
            .find(|r| r.current_week)
            .map(|r| r.week_number)
            .unwrap_or(WeekNumber::FIRST);

        Self {
            completed_weeks,
            current_week,
            total_weeks: TOTAL_WEEKS,
            percent_complete: percent_of_total(completed_weeks),
        }
    }
}

/// Share of the program completed, rounded half-up.
fn percent_of_total(completed_weeks: u8) -> u8 {
    let total = u32::from(TOTAL_WEEKS);
    ((u32::from(completed_weeks) * 100 + total / 2) / total) as u8
}

/// Result of completing a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekCompletion {
    Completed { next_current: Option<WeekNumber> },
    AlreadyCompleted,
}

/// All progress rows for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEnrollment {
    user_id: UserId,
    rows: Vec<UserProgress>,
}

impl ProgramEnrollment {
    /// New enrollment with week 1 current.
    pub fn start(user_id: UserId) -> Self {
        Self {
            user_id,
            rows: vec![UserProgress::current(WeekNumber::FIRST)],
        }
    }

    /// Rebuilds from stored rows. Rows are kept ordered by week.
    pub fn from_rows(user_id: UserId, mut rows: Vec<UserProgress>) -> Self {
        rows.sort_by_key(|r| r.week_number);
        rows.dedup_by_key(|r| r.week_number);
        Self { user_id, rows }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn rows(&self) -> &[UserProgress] {
        &self.rows
    }

    pub fn progress(&self) -> ProgramProgress {
        ProgramProgress::from_rows(&self.rows)
    }

    fn row(&self, week: WeekNumber) -> Option<&UserProgress> {
        self.rows.iter().find(|r| r.week_number == week)
    }

    fn current_week(&self) -> Option<WeekNumber> {
        self.rows.iter().find(|r| r.current_week).map(|r| r.week_number)
    }

    /// Furthest week the participant may open. Once the last week is
    /// complete there is no current flag and nothing is locked.
    fn frontier(&self) -> WeekNumber {
        match self.current_week() {
            Some(week) => week,
            None if self.rows.iter().any(|r| r.completed) => WeekNumber::LAST,
            None => WeekNumber::FIRST,
        }
    }

    pub fn status_of(&self, week: WeekNumber) -> WeekStatus {
        match self.row(week) {
            Some(row) if row.completed => WeekStatus::Completed,
            Some(row) if row.current_week => WeekStatus::Current,
            _ if week > self.frontier() => WeekStatus::Locked,
            _ if self.current_week().is_none() && week == WeekNumber::FIRST => {
                WeekStatus::Current
            }
            _ => WeekStatus::Available,
        }
    }

    /// Marks `week` complete. Completing the current week moves the
    /// current flag to the following week.
    pub fn complete(
        &mut self,
        week: WeekNumber,
        now: Timestamp,
    ) -> Result<WeekCompletion, DomainError> {
        if self.row(week).is_some_and(|r| r.completed) {
            return Ok(WeekCompletion::AlreadyCompleted);
        }
        if week > self.frontier() {
            return Err(DomainError::new(
                ErrorCode::WeekLocked,
                format!("Week {} is not unlocked yet", week),
            )
            .with_detail("week_number", week.to_string()));
        }

        let was_current = self.frontier() == week;
        let row = self.row_mut(week);
        row.completed = true;
        row.completed_at = Some(now);
        row.current_week = false;

        let next_current = if was_current { week.next() } else { None };
        if let Some(next) = next_current {
            self.row_mut(next).current_week = true;
        }

        Ok(WeekCompletion::Completed { next_current })
    }

    fn row_mut(&mut self, week: WeekNumber) -> &mut UserProgress {
        let index = match self.rows.binary_search_by_key(&week, |r| r.week_number) {
            Ok(index) => index,
            Err(index) => {
                self.rows.insert(
                    index,
                    UserProgress {
                        week_number: week,
                        completed: false,
                        completed_at: None,
                        current_week: false,
                    },
                );
                index
            }
        };
        &mut self.rows[index]
    }
}
