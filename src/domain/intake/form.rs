//! Raw intake form input and its conversion into typed sections.
//!
//! Clients post the form the way it was filled in: free text, "Sim"/"Não"
//! answers and `DD/MM/YYYY` dates. Parsing is forgiving where the paper
//! form is (unparsable counts become "not informed") and strict where a
//! wrong value would be stored (dates, sex, alcohol use).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::{is_affirmative, RawSurveyAnswers, SurveyAnswers};
use crate::domain::foundation::ValidationError;
use crate::domain::participant::{PatientIdentification, Sex, ANONYMOUS_NAME};

use super::sections::{
    AlcoholUse, ClinicalIntake, FagerstromRecord, HealthHistory, IntakeSubmission, Motivation,
    SmokingHistory, MAX_MOTIVATION_LEVEL,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawIdentification {
    pub full_name: String,
    pub birth_date: String,
    pub age: String,
    pub sex: String,
    pub cpf: String,
    pub address: String,
    pub city_state: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSmokingHistory {
    pub age_started: String,
    pub total_years: String,
    pub current_per_day: String,
    pub highest_per_day: String,
    pub has_tried_quitting: String,
    pub quit_attempts: String,
    pub methods_used: Vec<String>,
    pub relapse_reason: String,
    pub first_urge_after_waking: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawHealthHistory {
    pub current_conditions: Vec<String>,
    pub medications: String,
    pub allergies: String,
    pub alcohol_use: String,
    pub uses_other_drugs: String,
    pub other_drugs: String,
    pub consumes_caffeine: String,
    pub caffeine_per_day: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMotivation {
    pub main_reason: String,
    pub motivation_level: String,
    pub family_support: String,
    pub anxious_without_smoking: String,
    pub smoking_contexts: Vec<String>,
    pub psychological_support: String,
    pub desired_quit_date: String,
    pub expectations: String,
}

/// The intake form exactly as the client collected it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawIntakeForm {
    pub identification: RawIdentification,
    pub smoking: RawSmokingHistory,
    pub health: RawHealthHistory,
    pub motivation: RawMotivation,
    pub fagerstrom: RawSurveyAnswers,
}

impl RawIntakeForm {
    /// Parses the form. `account_email` fills in the email when the
    /// participant left it blank.
    pub fn parse(&self, account_email: Option<&str>) -> Result<IntakeSubmission, ValidationError> {
        let identification = self.identification.parse(account_email)?;
        let clinical = ClinicalIntake {
            smoking: self.smoking.parse(),
            health: self.health.parse()?,
            motivation: self.motivation.parse()?,
            fagerstrom: FagerstromRecord::score(SurveyAnswers::from_raw(&self.fagerstrom)),
        };

        Ok(IntakeSubmission {
            identification,
            clinical,
        })
    }
}

impl RawIdentification {
    fn parse(&self, account_email: Option<&str>) -> Result<PatientIdentification, ValidationError> {
        let sex = match optional_text(&self.sex) {
            Some(label) => Some(
                Sex::parse(&label)
                    .ok_or_else(|| ValidationError::invalid_format("sex", "unknown option"))?,
            ),
            None => None,
        };

        Ok(PatientIdentification {
            full_name: optional_text(&self.full_name).unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
            birth_date: parse_date("birth_date", &self.birth_date)?,
            age: parse_count(&self.age),
            sex,
            cpf: optional_text(&self.cpf),
            address: optional_text(&self.address),
            city_state: optional_text(&self.city_state),
            phone: optional_text(&self.phone),
            email: optional_text(&self.email).or_else(|| account_email.map(str::to_string)),
        })
    }
}

impl RawSmokingHistory {
    fn parse(&self) -> SmokingHistory {
        SmokingHistory {
            age_started: parse_count(&self.age_started),
            total_years: parse_count(&self.total_years),
            current_per_day: parse_count(&self.current_per_day),
            highest_per_day: parse_count(&self.highest_per_day),
            has_tried_quitting: is_affirmative(&self.has_tried_quitting),
            quit_attempts: parse_count(&self.quit_attempts),
            methods_used: clean_list(&self.methods_used),
            relapse_reason: optional_text(&self.relapse_reason),
            first_urge_after_waking: optional_text(&self.first_urge_after_waking),
        }
    }
}

impl RawHealthHistory {
    fn parse(&self) -> Result<HealthHistory, ValidationError> {
        let alcohol_use = match optional_text(&self.alcohol_use) {
            Some(label) => Some(
                AlcoholUse::parse(&label)
                    .ok_or_else(|| ValidationError::invalid_format("alcohol_use", "unknown option"))?,
            ),
            None => None,
        };

        Ok(HealthHistory {
            current_conditions: clean_list(&self.current_conditions),
            medications: optional_text(&self.medications),
            allergies: optional_text(&self.allergies),
            alcohol_use,
            uses_other_drugs: is_affirmative(&self.uses_other_drugs),
            other_drugs: optional_text(&self.other_drugs),
            consumes_caffeine: is_affirmative(&self.consumes_caffeine),
            caffeine_per_day: optional_text(&self.caffeine_per_day),
        })
    }
}

impl RawMotivation {
    fn parse(&self) -> Result<Motivation, ValidationError> {
        Ok(Motivation {
            main_reason: optional_text(&self.main_reason),
            motivation_level: parse_motivation_level(&self.motivation_level),
            family_support: is_affirmative(&self.family_support),
            anxious_without_smoking: is_affirmative(&self.anxious_without_smoking),
            smoking_contexts: clean_list(&self.smoking_contexts),
            psychological_support: is_affirmative(&self.psychological_support),
            desired_quit_date: parse_date("desired_quit_date", &self.desired_quit_date)?,
            expectations: optional_text(&self.expectations),
        })
    }
}

/// Trimmed text, or `None` when blank.
fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn clean_list(values: &[String]) -> Vec<String> {
    values.iter().filter_map(|v| optional_text(v)).collect()
}

/// Non-negative count; anything unparsable is "not informed".
fn parse_count<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

/// Parses the motivation scale, clamping into `0..=10`.
fn parse_motivation_level(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .map(|level| level.clamp(0, i64::from(MAX_MOTIVATION_LEVEL)) as u8)
}

/// Accepts `DD/MM/YYYY` (day and month may be one digit) or ISO `YYYY-MM-DD`.
pub fn parse_date(field: &str, value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = if trimmed.contains('/') {
        NaiveDate::parse_from_str(trimmed, "%d/%m/%Y")
    } else {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
    };

    parsed
        .map(Some)
        .map_err(|_| ValidationError::invalid_format(field, "expected DD/MM/YYYY"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{DependenceLevel, RawAnswer};

    fn text(s: &str) -> Option<RawAnswer> {
        Some(RawAnswer::Text(s.to_string()))
    }

    fn filled_form() -> RawIntakeForm {
        RawIntakeForm {
            identification: RawIdentification {
                full_name: "  João Pereira ".into(),
                birth_date: "5/3/1980".into(),
                age: "44".into(),
                sex: "Masculino".into(),
                ..Default::default()
            },
            smoking: RawSmokingHistory {
                age_started: "15".into(),
                current_per_day: "20".into(),
                has_tried_quitting: "Sim".into(),
                quit_attempts: "três".into(),
                methods_used: vec!["Adesivo".into(), "  ".into()],
                ..Default::default()
            },
            health: RawHealthHistory {
                alcohol_use: "Socialmente".into(),
                consumes_caffeine: "Sim".into(),
                ..Default::default()
            },
            motivation: RawMotivation {
                motivation_level: "15".into(),
                desired_quit_date: "2025-02-01".into(),
                family_support: "Sim".into(),
                ..Default::default()
            },
            fagerstrom: RawSurveyAnswers {
                minutes_to_first_use: text("6–30 min"),
                cigarettes_per_day: text("11–20"),
                smokes_more_in_morning: text("Sim"),
                ..Default::default()
            },
        }
    }

    #[test]
    fn parses_complete_form() {
        let submission = filled_form().parse(Some("joao@example.com")).unwrap();

        let id = &submission.identification;
        assert_eq!(id.full_name, "João Pereira");
        assert_eq!(id.birth_date, NaiveDate::from_ymd_opt(1980, 3, 5));
        assert_eq!(id.age, Some(44));
        assert_eq!(id.sex, Some(Sex::Male));
        assert_eq!(id.email.as_deref(), Some("joao@example.com"));

        let smoking = &submission.clinical.smoking;
        assert_eq!(smoking.age_started, Some(15));
        assert!(smoking.has_tried_quitting);
        assert_eq!(smoking.quit_attempts, None);
        assert_eq!(smoking.methods_used, vec!["Adesivo".to_string()]);

        assert_eq!(submission.clinical.health.alcohol_use, Some(AlcoholUse::Socially));
        assert!(submission.clinical.health.consumes_caffeine);

        let motivation = &submission.clinical.motivation;
        assert_eq!(motivation.motivation_level, Some(10));
        assert_eq!(motivation.desired_quit_date, NaiveDate::from_ymd_opt(2025, 2, 1));

        let score = submission.clinical.fagerstrom.score;
        assert_eq!(score.points(), 4);
        assert_eq!(score.level(), DependenceLevel::Mild);
    }

    #[test]
    fn empty_form_uses_defaults() {
        let submission = RawIntakeForm::default().parse(None).unwrap();
        assert_eq!(submission.identification.full_name, ANONYMOUS_NAME);
        assert_eq!(submission.identification.email, None);
        assert_eq!(submission.clinical.fagerstrom.score.points(), 0);
        assert!(!submission.clinical.motivation.family_support);
    }

    #[test]
    fn typed_email_wins_over_account_email() {
        let mut form = RawIntakeForm::default();
        form.identification.email = "outro@example.com".into();
        let submission = form.parse(Some("conta@example.com")).unwrap();
        assert_eq!(
            submission.identification.email.as_deref(),
            Some("outro@example.com")
        );
    }

    #[test]
    fn malformed_birth_date_is_rejected() {
        let mut form = RawIntakeForm::default();
        form.identification.birth_date = "31/02/1990".into();
        let err = form.parse(None).unwrap_err();
        assert_eq!(err.field(), "birth_date");
    }

    #[test]
    fn unknown_sex_is_rejected() {
        let mut form = RawIntakeForm::default();
        form.identification.sex = "xyz".into();
        assert_eq!(form.parse(None).unwrap_err().field(), "sex");
    }

    #[test]
    fn negative_motivation_clamps_to_zero() {
        assert_eq!(parse_motivation_level("-3"), Some(0));
        assert_eq!(parse_motivation_level("7"), Some(7));
        assert_eq!(parse_motivation_level("alta"), None);
    }

    #[test]
    fn form_deserializes_with_missing_sections() {
        let form: RawIntakeForm =
            serde_json::from_str(r#"{"identification": {"full_name": "Ana"}}"#).unwrap();
        assert_eq!(form.identification.full_name, "Ana");
        assert!(form.smoking.methods_used.is_empty());
    }
}
