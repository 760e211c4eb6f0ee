//! Daily withdrawal report: symptoms, diary and self-rated levels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DailyReportId, Timestamp, UserId, ValidationError};

/// Upper bound of the mood and craving scales.
pub const MAX_LEVEL: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Anxiety,
    Fear,
    Headache,
    Restlessness,
    Irritability,
    WeightGain,
    Cough,
    SoreThroat,
    Constipation,
    Impatience,
}

impl Symptom {
    pub const ALL: [Symptom; 10] = [
        Symptom::Anxiety,
        Symptom::Fear,
        Symptom::Headache,
        Symptom::Restlessness,
        Symptom::Irritability,
        Symptom::WeightGain,
        Symptom::Cough,
        Symptom::SoreThroat,
        Symptom::Constipation,
        Symptom::Impatience,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::Anxiety => "Ansiedade",
            Symptom::Fear => "Medo",
            Symptom::Headache => "Dor de cabeça",
            Symptom::Restlessness => "Agitação",
            Symptom::Irritability => "Irritabilidade",
            Symptom::WeightGain => "Ganho de peso",
            Symptom::Cough => "Tosse",
            Symptom::SoreThroat => "Dor de garganta",
            Symptom::Constipation => "Constipação",
            Symptom::Impatience => "Impaciência",
        }
    }

    /// Accepts the display label, case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        let wanted = label.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|s| s.label().to_lowercase() == wanted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    pub id: DailyReportId,
    pub user_id: UserId,
    pub report_date: NaiveDate,
    pub symptoms: Vec<Symptom>,
    pub diary_text: Option<String>,
    pub mood_level: Option<u8>,
    pub craving_level: Option<u8>,
    pub created_at: Timestamp,
}

impl DailyReport {
    /// Builds a report. Symptoms are deduplicated and the diary is
    /// trimmed, blank meaning absent.
    pub fn new(
        user_id: UserId,
        report_date: NaiveDate,
        mut symptoms: Vec<Symptom>,
        diary_text: Option<String>,
        mood_level: Option<u8>,
        craving_level: Option<u8>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        check_level("mood_level", mood_level)?;
        check_level("craving_level", craving_level)?;

        symptoms.sort();
        symptoms.dedup();

        let diary_text = diary_text
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Ok(Self {
            id: DailyReportId::new(),
            user_id,
            report_date,
            symptoms,
            diary_text,
            mood_level,
            craving_level,
            created_at: now,
        })
    }

    /// Takes the content of `newer`, keeping this report's identity.
    pub fn replace_content(&mut self, newer: DailyReport) {
        self.symptoms = newer.symptoms;
        self.diary_text = newer.diary_text;
        self.mood_level = newer.mood_level;
        self.craving_level = newer.craving_level;
    }
}

fn check_level(field: &str, level: Option<u8>) -> Result<(), ValidationError> {
    match level {
        Some(value) if value > MAX_LEVEL => Err(ValidationError::out_of_range(
            field,
            0,
            i64::from(MAX_LEVEL),
            i64::from(value),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
    }

    fn report(symptoms: Vec<Symptom>, mood: Option<u8>) -> Result<DailyReport, ValidationError> {
        DailyReport::new(
            UserId::new("user-1").unwrap(),
            today(),
            symptoms,
            Some("  ".into()),
            mood,
            None,
            Timestamp::now(),
        )
    }

    #[test]
    fn symptoms_are_deduplicated() {
        let r = report(
            vec![Symptom::Cough, Symptom::Anxiety, Symptom::Cough],
            Some(5),
        )
        .unwrap();
        assert_eq!(r.symptoms, vec![Symptom::Anxiety, Symptom::Cough]);
        assert_eq!(r.diary_text, None);
    }

    #[test]
    fn level_above_ten_is_rejected() {
        let err = report(vec![], Some(11)).unwrap_err();
        assert_eq!(err.field(), "mood_level");
    }

    #[test]
    fn symptom_labels_round_trip() {
        for symptom in Symptom::ALL {
            assert_eq!(Symptom::parse(symptom.label()), Some(symptom));
        }
        assert_eq!(Symptom::parse("dor de cabeça"), Some(Symptom::Headache));
        assert_eq!(Symptom::parse("Insônia"), None);
    }

    #[test]
    fn replace_content_keeps_identity() {
        let mut first = report(vec![Symptom::Fear], Some(2)).unwrap();
        let id = first.id;
        let second = report(vec![Symptom::Cough], Some(8)).unwrap();
        first.replace_content(second);
        assert_eq!(first.id, id);
        assert_eq!(first.symptoms, vec![Symptom::Cough]);
        assert_eq!(first.mood_level, Some(8));
    }
}
