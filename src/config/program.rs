//! Program settings: pricing used for savings and chat limits.

use serde::Deserialize;

use crate::domain::community::DEFAULT_MAX_MESSAGE_CHARS;
use crate::domain::tracking::PackPricing;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct ProgramConfig {
    /// Price of one pack, in centavos
    #[serde(default = "default_pack_price_cents")]
    pub cigarette_pack_price_cents: i64,

    #[serde(default = "default_cigarettes_per_pack")]
    pub cigarettes_per_pack: u32,

    /// Longest accepted chat message, in characters
    #[serde(default = "default_chat_max_chars")]
    pub chat_max_chars: usize,

    /// Most messages returned by the history endpoint
    #[serde(default = "default_chat_history_limit")]
    pub chat_history_limit: usize,

    /// First day of the seeded event schedule (YYYY-MM-DD); today when unset
    pub schedule_start: Option<chrono::NaiveDate>,
}

impl ProgramConfig {
    pub fn pricing(&self) -> PackPricing {
        PackPricing::new(self.cigarette_pack_price_cents, self.cigarettes_per_pack)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cigarette_pack_price_cents < 0 {
            return Err(ValidationError::InvalidProgramSetting("cigarette_pack_price_cents"));
        }
        if self.cigarettes_per_pack == 0 {
            return Err(ValidationError::InvalidProgramSetting("cigarettes_per_pack"));
        }
        if self.chat_max_chars == 0 {
            return Err(ValidationError::InvalidProgramSetting("chat_max_chars"));
        }
        if self.chat_history_limit == 0 {
            return Err(ValidationError::InvalidProgramSetting("chat_history_limit"));
        }
        Ok(())
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            cigarette_pack_price_cents: default_pack_price_cents(),
            cigarettes_per_pack: default_cigarettes_per_pack(),
            chat_max_chars: default_chat_max_chars(),
            chat_history_limit: default_chat_history_limit(),
            schedule_start: None,
        }
    }
}

fn default_pack_price_cents() -> i64 {
    1000
}

fn default_cigarettes_per_pack() -> u32 {
    20
}

fn default_chat_max_chars() -> usize {
    DEFAULT_MAX_MESSAGE_CHARS
}

fn default_chat_history_limit() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ProgramConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pricing(), PackPricing::new(1000, 20));
        assert_eq!(config.chat_max_chars, 1000);
    }

    #[test]
    fn empty_pack_is_rejected() {
        let config = ProgramConfig {
            cigarettes_per_pack: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidProgramSetting("cigarettes_per_pack"))
        );
    }
}
