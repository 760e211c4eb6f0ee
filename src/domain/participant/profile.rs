//! Participant profile - identification data from the first intake step.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Name used whenever a participant has not told us theirs.
pub const ANONYMOUS_NAME: &str = "Usuário";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Feminino",
            Sex::Other => "Outro",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "masculino" | "male" | "m" => Some(Sex::Male),
            "feminino" | "female" | "f" => Some(Sex::Female),
            "outro" | "other" => Some(Sex::Other),
            _ => None,
        }
    }
}

/// Patient identification block of the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientIdentification {
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<u16>,
    pub sex: Option<Sex>,
    pub cpf: Option<String>,
    pub address: Option<String>,
    pub city_state: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Default for PatientIdentification {
    fn default() -> Self {
        Self {
            full_name: ANONYMOUS_NAME.to_string(),
            birth_date: None,
            age: None,
            sex: None,
            cpf: None,
            address: None,
            city_state: None,
            phone: None,
            email: None,
        }
    }
}

/// A participant's profile row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub identification: PatientIdentification,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserProfile {
    pub fn new(user_id: UserId, identification: PatientIdentification, now: Timestamp) -> Self {
        Self {
            user_id,
            identification,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the identification block, keeping the creation time.
    pub fn update(&mut self, identification: PatientIdentification, now: Timestamp) {
        self.identification = identification;
        self.updated_at = now;
    }

    /// Name shown in the chat feed and profile header.
    pub fn display_name(&self) -> &str {
        display_name(Some(self.identification.full_name.as_str()))
    }

    /// First word of the full name, used in dashboard greetings.
    pub fn first_name(&self) -> &str {
        first_name(Some(self.identification.full_name.as_str()))
    }
}

/// Trimmed full name, or [`ANONYMOUS_NAME`] when absent or blank.
pub fn display_name(full_name: Option<&str>) -> &str {
    match full_name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => ANONYMOUS_NAME,
    }
}

/// First whitespace-separated word of the name, or [`ANONYMOUS_NAME`].
pub fn first_name(full_name: Option<&str>) -> &str {
    display_name(full_name)
        .split_whitespace()
        .next()
        .unwrap_or(ANONYMOUS_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> UserProfile {
        UserProfile::new(
            UserId::new("user-1").unwrap(),
            PatientIdentification {
                full_name: name.to_string(),
                ..Default::default()
            },
            Timestamp::now(),
        )
    }

    #[test]
    fn first_name_takes_first_word() {
        assert_eq!(profile("Maria da Silva").first_name(), "Maria");
    }

    #[test]
    fn blank_name_falls_back_to_anonymous() {
        assert_eq!(profile("   ").display_name(), ANONYMOUS_NAME);
        assert_eq!(first_name(None), ANONYMOUS_NAME);
    }

    #[test]
    fn update_keeps_created_at() {
        let mut p = profile("Ana");
        let created = p.created_at;
        let later = Timestamp::now();
        p.update(
            PatientIdentification {
                full_name: "Ana Souza".into(),
                ..Default::default()
            },
            later,
        );
        assert_eq!(p.created_at, created);
        assert_eq!(p.updated_at, later);
        assert_eq!(p.display_name(), "Ana Souza");
    }

    #[test]
    fn sex_parses_form_labels() {
        assert_eq!(Sex::parse("Feminino"), Some(Sex::Female));
        assert_eq!(Sex::parse(Sex::Other.label()), Some(Sex::Other));
        assert_eq!(Sex::parse("?"), None);
    }
}
