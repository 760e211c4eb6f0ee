//! Clinical sections of the intake form (anamnesis).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::{DependenceScore, DependenceScoreCalculator, SurveyAnswers};
use crate::domain::participant::PatientIdentification;

/// Upper bound of the self-reported motivation scale.
pub const MAX_MOTIVATION_LEVEL: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholUse {
    No,
    Socially,
    Frequently,
}

impl AlcoholUse {
    pub fn label(&self) -> &'static str {
        match self {
            AlcoholUse::No => "Não",
            AlcoholUse::Socially => "Socialmente",
            AlcoholUse::Frequently => "Frequentemente",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "não" | "nao" | "no" => Some(AlcoholUse::No),
            "socialmente" | "socially" => Some(AlcoholUse::Socially),
            "frequentemente" | "frequently" => Some(AlcoholUse::Frequently),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokingHistory {
    pub age_started: Option<u16>,
    pub total_years: Option<u16>,
    pub current_per_day: Option<u32>,
    pub highest_per_day: Option<u32>,
    pub has_tried_quitting: bool,
    pub quit_attempts: Option<u32>,
    pub methods_used: Vec<String>,
    pub relapse_reason: Option<String>,
    pub first_urge_after_waking: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthHistory {
    pub current_conditions: Vec<String>,
    pub medications: Option<String>,
    pub allergies: Option<String>,
    pub alcohol_use: Option<AlcoholUse>,
    pub uses_other_drugs: bool,
    pub other_drugs: Option<String>,
    pub consumes_caffeine: bool,
    pub caffeine_per_day: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motivation {
    pub main_reason: Option<String>,
    /// Always within `0..=MAX_MOTIVATION_LEVEL`.
    pub motivation_level: Option<u8>,
    pub family_support: bool,
    pub anxious_without_smoking: bool,
    pub smoking_contexts: Vec<String>,
    pub psychological_support: bool,
    pub desired_quit_date: Option<NaiveDate>,
    pub expectations: Option<String>,
}

/// Fagerström answers together with the score they produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FagerstromRecord {
    pub answers: SurveyAnswers,
    pub score: DependenceScore,
}

impl FagerstromRecord {
    pub fn score(answers: SurveyAnswers) -> Self {
        Self {
            score: DependenceScoreCalculator::compute_score(&answers),
            answers,
        }
    }
}

/// Everything from the intake except identification, which lives on the
/// participant profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalIntake {
    pub smoking: SmokingHistory,
    pub health: HealthHistory,
    pub motivation: Motivation,
    pub fagerstrom: FagerstromRecord,
}

/// A fully parsed intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeSubmission {
    pub identification: PatientIdentification,
    pub clinical: ClinicalIntake,
}
