//! Achievements and encouragement keyed on days without smoking.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstDay,
    OneWeek,
    TwoWeeks,
    OneMonth,
    ThreeMonths,
    SixMonths,
}

impl Achievement {
    pub const ALL: [Achievement; 6] = [
        Achievement::FirstDay,
        Achievement::OneWeek,
        Achievement::TwoWeeks,
        Achievement::OneMonth,
        Achievement::ThreeMonths,
        Achievement::SixMonths,
    ];

    /// Days smoke-free needed to unlock.
    pub fn threshold_days(&self) -> u32 {
        match self {
            Achievement::FirstDay => 1,
            Achievement::OneWeek => 7,
            Achievement::TwoWeeks => 14,
            Achievement::OneMonth => 30,
            Achievement::ThreeMonths => 90,
            Achievement::SixMonths => 180,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstDay => "Primeiro dia",
            Achievement::OneWeek => "Uma semana livre",
            Achievement::TwoWeeks => "Duas semanas",
            Achievement::OneMonth => "Um mês livre",
            Achievement::ThreeMonths => "Três meses",
            Achievement::SixMonths => "Seis meses",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstDay => "Parabéns por dar o primeiro passo!",
            Achievement::OneWeek => "Primeira semana completada",
            Achievement::TwoWeeks => "Duas semanas de conquista",
            Achievement::OneMonth => "Um mês completo sem vícios",
            Achievement::ThreeMonths => "Trimestre de vitórias",
            Achievement::SixMonths => "Meio ano de conquistas",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementStatus {
    pub achievement: Achievement,
    pub unlocked: bool,
}

/// Every achievement, in order, flagged by whether it is unlocked.
pub fn achievements(days_smoke_free: u32) -> Vec<AchievementStatus> {
    Achievement::ALL
        .iter()
        .map(|&achievement| AchievementStatus {
            achievement,
            unlocked: days_smoke_free >= achievement.threshold_days(),
        })
        .collect()
}

/// Dashboard message for the current stretch without smoking.
pub fn contextual_message(days_smoke_free: u32) -> &'static str {
    match days_smoke_free {
        0..=3 => "Os primeiros dias são os mais desafiadores. Seu corpo está se adaptando à ausência da nicotina. É normal sentir ansiedade e irritabilidade.",
        4..=7 => "Você está superando a fase mais difícil! Sua circulação está melhorando e o paladar voltando ao normal.",
        8..=14 => "Parabéns! Duas semanas é um marco importante. Sua capacidade pulmonar está aumentando e você tem mais energia.",
        15..=30 => "Excelente progresso! Um mês livre do cigarro. Sua pele está mais saudável e o risco de infecções diminuiu.",
        _ => "Você é uma inspiração! Continue assim, cada dia livre é uma vitória para sua saúde e bem-estar.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked(days: u32) -> Vec<Achievement> {
        achievements(days)
            .into_iter()
            .filter(|s| s.unlocked)
            .map(|s| s.achievement)
            .collect()
    }

    #[test]
    fn nothing_unlocked_on_day_zero() {
        assert!(unlocked(0).is_empty());
        assert_eq!(achievements(0).len(), 6);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(unlocked(7), vec![Achievement::FirstDay, Achievement::OneWeek]);
        assert_eq!(unlocked(29).len(), 3);
        assert_eq!(unlocked(180).len(), 6);
    }

    #[test]
    fn message_bands() {
        assert!(contextual_message(0).starts_with("Os primeiros dias"));
        assert!(contextual_message(3).starts_with("Os primeiros dias"));
        assert!(contextual_message(4).starts_with("Você está superando"));
        assert!(contextual_message(14).starts_with("Parabéns!"));
        assert!(contextual_message(30).starts_with("Excelente"));
        assert!(contextual_message(31).starts_with("Você é uma inspiração"));
    }
}
