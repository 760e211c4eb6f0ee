//! Program weeks and their grouping into phases.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Number of weeks in the program.
pub const TOTAL_WEEKS: u8 = 12;

/// A week of the program, always within `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekNumber(u8);

impl WeekNumber {
    pub const FIRST: WeekNumber = WeekNumber(1);
    pub const LAST: WeekNumber = WeekNumber(TOTAL_WEEKS);

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (1..=TOTAL_WEEKS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "week_number",
                1,
                i64::from(TOTAL_WEEKS),
                i64::from(value),
            ))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn next(&self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    pub fn phase(&self) -> ProgramPhase {
        match self.0 {
            1..=4 => ProgramPhase::Preparation,
            5..=8 => ProgramPhase::Strengthening,
            _ => ProgramPhase::Consolidation,
        }
    }

    /// Every week in order.
    pub fn all() -> impl Iterator<Item = WeekNumber> {
        (1..=TOTAL_WEEKS).map(WeekNumber)
    }
}

impl TryFrom<u8> for WeekNumber {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekNumber> for u8 {
    fn from(week: WeekNumber) -> Self {
        week.0
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Month-long phase a week belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramPhase {
    Preparation,
    Strengthening,
    Consolidation,
}

impl ProgramPhase {
    pub fn title(&self) -> &'static str {
        match self {
            ProgramPhase::Preparation => "Preparação e Consciência",
            ProgramPhase::Strengthening => "Fortalecimento e Mudança",
            ProgramPhase::Consolidation => "Consolidação e Nova Vida",
        }
    }

    pub fn month(&self) -> u8 {
        match self {
            ProgramPhase::Preparation => 1,
            ProgramPhase::Strengthening => 2,
            ProgramPhase::Consolidation => 3,
        }
    }
}

/// Content of one program week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramWeek {
    pub week_number: WeekNumber,
    pub title: String,
    pub theme: String,
    pub lesson: String,
    pub circle: String,
    pub activity: String,
    pub checkin: String,
    pub task_title: String,
    pub task_description: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl ProgramWeek {
    pub fn phase(&self) -> ProgramPhase {
        self.week_number.phase()
    }
}
