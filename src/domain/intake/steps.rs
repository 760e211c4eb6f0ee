//! Ordering of the intake form steps.

use serde::{Deserialize, Serialize};

/// One page of the multi-step intake form.
///
/// The Fagerström questions are asked on the smoking-history page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    Identification,
    SmokingHistory,
    HealthAndSubstances,
    MotivationAndGoal,
}

impl IntakeStep {
    pub const ALL: [IntakeStep; 4] = [
        IntakeStep::Identification,
        IntakeStep::SmokingHistory,
        IntakeStep::HealthAndSubstances,
        IntakeStep::MotivationAndGoal,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(&self) -> usize {
        match self {
            IntakeStep::Identification => 0,
            IntakeStep::SmokingHistory => 1,
            IntakeStep::HealthAndSubstances => 2,
            IntakeStep::MotivationAndGoal => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            IntakeStep::Identification => "Identificação",
            IntakeStep::SmokingHistory => "Histórico de Tabagismo",
            IntakeStep::HealthAndSubstances => "Saúde e Substâncias",
            IntakeStep::MotivationAndGoal => "Motivação e Objetivo",
        }
    }

    pub fn first() -> Self {
        IntakeStep::Identification
    }

    pub fn next(&self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Submitting on the last step saves the whole form.
    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}
