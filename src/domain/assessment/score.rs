//! Dependence score and its qualitative level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest total the questionnaire can produce.
pub const MAX_POINTS: u8 = 10;

/// Qualitative nicotine-dependence band.
///
/// Bands are inclusive on their upper bound: 0–2 low, 3–4 mild,
/// 5–7 moderate, 8–10 high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependenceLevel {
    Low,
    Mild,
    Moderate,
    High,
}

impl DependenceLevel {
    pub const ALL: [DependenceLevel; 4] = [
        DependenceLevel::Low,
        DependenceLevel::Mild,
        DependenceLevel::Moderate,
        DependenceLevel::High,
    ];

    pub fn from_points(points: u8) -> Self {
        match points {
            0..=2 => DependenceLevel::Low,
            3..=4 => DependenceLevel::Mild,
            5..=7 => DependenceLevel::Moderate,
            _ => DependenceLevel::High,
        }
    }

    /// Label persisted in `nivel_dependencia` and shown to participants.
    pub fn label(&self) -> &'static str {
        match self {
            DependenceLevel::Low => "Baixa dependência",
            DependenceLevel::Mild => "Dependência leve",
            DependenceLevel::Moderate => "Dependência moderada",
            DependenceLevel::High => "Dependência elevada",
        }
    }

    /// Reverse of [`label`](Self::label), also accepting the snake_case code.
    pub fn parse(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL.into_iter().find(|level| {
            level.label().eq_ignore_ascii_case(trimmed) || level.code() == trimmed
        })
    }

    pub fn code(&self) -> &'static str {
        match self {
            DependenceLevel::Low => "low",
            DependenceLevel::Mild => "mild",
            DependenceLevel::Moderate => "moderate",
            DependenceLevel::High => "high",
        }
    }
}

impl fmt::Display for DependenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring one questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependenceScore {
    points: u8,
    level: DependenceLevel,
}

impl DependenceScore {
    /// Builds a score from a point total, saturating at [`MAX_POINTS`].
    pub fn from_points(points: u8) -> Self {
        let points = points.min(MAX_POINTS);
        Self {
            points,
            level: DependenceLevel::from_points(points),
        }
    }

    pub fn points(&self) -> u8 {
        self.points
    }

    pub fn level(&self) -> DependenceLevel {
        self.level
    }
}
