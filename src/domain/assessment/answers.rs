//! Fagerström questionnaire answers.
//!
//! The three categorical questions are closed enums. A `SurveyAnswers`
//! holds them as `Option`s: `None` means the answer was missing or was
//! not one of the recognised options, and scores zero. The typed
//! constructor [`SurveyAnswers::complete`] requires all six answers.

use serde::{Deserialize, Serialize};

/// Lower-cases, folds dashes and drops whitespace so that form labels
/// ("6–30 min"), API codes ("six_to_thirty") and loose input ("6-30")
/// compare equal.
fn normalize(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace(['–', '—'], "-")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .trim_end_matches("min")
        .to_string()
}

/// True for the affirmative answers the intake form produces ("Sim") and
/// the usual machine spellings.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "sim" | "s" | "yes" | "y" | "true" | "1"
    )
}

/// Q1: how soon after waking the first cigarette is smoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinutesToFirstUse {
    UpToFive,
    SixToThirty,
    ThirtyOneToSixty,
    OverSixty,
}

impl MinutesToFirstUse {
    pub const ALL: [MinutesToFirstUse; 4] = [
        MinutesToFirstUse::UpToFive,
        MinutesToFirstUse::SixToThirty,
        MinutesToFirstUse::ThirtyOneToSixty,
        MinutesToFirstUse::OverSixty,
    ];

    pub fn points(&self) -> u8 {
        match self {
            MinutesToFirstUse::UpToFive => 3,
            MinutesToFirstUse::SixToThirty => 2,
            MinutesToFirstUse::ThirtyOneToSixty => 1,
            MinutesToFirstUse::OverSixty => 0,
        }
    }

    /// Label shown on the intake form and stored with the record.
    pub fn label(&self) -> &'static str {
        match self {
            MinutesToFirstUse::UpToFive => "≤ 5 min",
            MinutesToFirstUse::SixToThirty => "6–30 min",
            MinutesToFirstUse::ThirtyOneToSixty => "31–60 min",
            MinutesToFirstUse::OverSixty => "> 60 min",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "≤5" | "<=5" | "<5" | "menosde5" | "up_to_five" => Some(Self::UpToFive),
            "6-30" | "six_to_thirty" => Some(Self::SixToThirty),
            "31-60" | "thirty_one_to_sixty" => Some(Self::ThirtyOneToSixty),
            ">60" | "maisde1h" | "over_sixty" => Some(Self::OverSixty),
            _ => None,
        }
    }
}

/// Q3: which cigarette would be hardest to give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MostMissedCigarette {
    FirstOfMorning,
    Other,
}

impl MostMissedCigarette {
    pub const ALL: [MostMissedCigarette; 2] =
        [MostMissedCigarette::FirstOfMorning, MostMissedCigarette::Other];

    pub fn points(&self) -> u8 {
        match self {
            MostMissedCigarette::FirstOfMorning => 1,
            MostMissedCigarette::Other => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MostMissedCigarette::FirstOfMorning => "O primeiro da manhã",
            MostMissedCigarette::Other => "Outros",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "oprimeirodamanhã" | "oprimeirodamanha" | "first_of_morning" => {
                Some(Self::FirstOfMorning)
            }
            "outros" | "outro" | "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Q4: cigarettes smoked per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CigarettesPerDay {
    TenOrFewer,
    ElevenToTwenty,
    TwentyOneToThirty,
    ThirtyOneOrMore,
}

impl CigarettesPerDay {
    pub const ALL: [CigarettesPerDay; 4] = [
        CigarettesPerDay::TenOrFewer,
        CigarettesPerDay::ElevenToTwenty,
        CigarettesPerDay::TwentyOneToThirty,
        CigarettesPerDay::ThirtyOneOrMore,
    ];

    pub fn points(&self) -> u8 {
        match self {
            CigarettesPerDay::TenOrFewer => 0,
            CigarettesPerDay::ElevenToTwenty => 1,
            CigarettesPerDay::TwentyOneToThirty => 2,
            CigarettesPerDay::ThirtyOneOrMore => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CigarettesPerDay::TenOrFewer => "10 ou menos",
            CigarettesPerDay::ElevenToTwenty => "11–20",
            CigarettesPerDay::TwentyOneToThirty => "21–30",
            CigarettesPerDay::ThirtyOneOrMore => "31 ou mais",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "10oumenos" | "≤10" | "<=10" | "ten_or_fewer" => Some(Self::TenOrFewer),
            "11-20" | "eleven_to_twenty" => Some(Self::ElevenToTwenty),
            "21-30" | "twenty_one_to_thirty" => Some(Self::TwentyOneToThirty),
            "31oumais" | "≥31" | ">=31" | "thirty_one_or_more" => Some(Self::ThirtyOneOrMore),
            _ => None,
        }
    }
}

/// The six Fagerström answers for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SurveyAnswers {
    pub minutes_to_first_use: Option<MinutesToFirstUse>,
    pub difficulty_abstaining_in_forbidden_places: bool,
    pub most_missed_cigarette: Option<MostMissedCigarette>,
    pub cigarettes_per_day: Option<CigarettesPerDay>,
    pub smokes_more_in_morning: bool,
    pub smokes_when_ill: bool,
}

impl SurveyAnswers {
    /// Builds a fully answered questionnaire.
    pub fn complete(
        minutes_to_first_use: MinutesToFirstUse,
        difficulty_abstaining_in_forbidden_places: bool,
        most_missed_cigarette: MostMissedCigarette,
        cigarettes_per_day: CigarettesPerDay,
        smokes_more_in_morning: bool,
        smokes_when_ill: bool,
    ) -> Self {
        Self {
            minutes_to_first_use: Some(minutes_to_first_use),
            difficulty_abstaining_in_forbidden_places,
            most_missed_cigarette: Some(most_missed_cigarette),
            cigarettes_per_day: Some(cigarettes_per_day),
            smokes_more_in_morning,
            smokes_when_ill,
        }
    }

    /// Reads answers as they arrive from a form. Never fails: anything
    /// unrecognised becomes an unanswered question or `false`.
    pub fn from_raw(raw: &RawSurveyAnswers) -> Self {
        Self {
            minutes_to_first_use: raw
                .minutes_to_first_use
                .as_ref()
                .and_then(RawAnswer::as_text)
                .and_then(MinutesToFirstUse::parse),
            difficulty_abstaining_in_forbidden_places: RawAnswer::flag(
                &raw.difficulty_abstaining_in_forbidden_places,
            ),
            most_missed_cigarette: raw
                .most_missed_cigarette
                .as_ref()
                .and_then(RawAnswer::as_text)
                .and_then(MostMissedCigarette::parse),
            cigarettes_per_day: raw
                .cigarettes_per_day
                .as_ref()
                .and_then(RawAnswer::as_text)
                .and_then(CigarettesPerDay::parse),
            smokes_more_in_morning: RawAnswer::flag(&raw.smokes_more_in_morning),
            smokes_when_ill: RawAnswer::flag(&raw.smokes_when_ill),
        }
    }

    /// True when every categorical question carries a recognised answer.
    pub fn is_complete(&self) -> bool {
        self.minutes_to_first_use.is_some()
            && self.most_missed_cigarette.is_some()
            && self.cigarettes_per_day.is_some()
    }
}

/// A single answer as sent by a client: a JSON boolean, text, or anything
/// else a form might post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Flag(bool),
    Text(String),
    /// Any other JSON value. Scored as unanswered.
    Other(serde_json::Value),
}

impl RawAnswer {
    fn as_text(&self) -> Option<&str> {
        match self {
            RawAnswer::Text(text) => Some(text.as_str()),
            RawAnswer::Flag(_) | RawAnswer::Other(_) => None,
        }
    }

    fn flag(answer: &Option<RawAnswer>) -> bool {
        match answer {
            Some(RawAnswer::Flag(value)) => *value,
            Some(RawAnswer::Text(text)) => is_affirmative(text),
            Some(RawAnswer::Other(_)) | None => false,
        }
    }
}

/// Unvalidated questionnaire input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSurveyAnswers {
    pub minutes_to_first_use: Option<RawAnswer>,
    pub difficulty_abstaining_in_forbidden_places: Option<RawAnswer>,
    pub most_missed_cigarette: Option<RawAnswer>,
    pub cigarettes_per_day: Option<RawAnswer>,
    pub smokes_more_in_morning: Option<RawAnswer>,
    pub smokes_when_ill: Option<RawAnswer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<RawAnswer> {
        Some(RawAnswer::Text(s.to_string()))
    }

    #[test]
    fn form_labels_parse_to_their_variant() {
        for variant in MinutesToFirstUse::ALL {
            assert_eq!(MinutesToFirstUse::parse(variant.label()), Some(variant));
        }
        for variant in MostMissedCigarette::ALL {
            assert_eq!(MostMissedCigarette::parse(variant.label()), Some(variant));
        }
        for variant in CigarettesPerDay::ALL {
            assert_eq!(CigarettesPerDay::parse(variant.label()), Some(variant));
        }
    }

    #[test]
    fn hyphen_and_en_dash_are_interchangeable() {
        assert_eq!(MinutesToFirstUse::parse("6-30 min"), Some(MinutesToFirstUse::SixToThirty));
        assert_eq!(MinutesToFirstUse::parse("6–30"), Some(MinutesToFirstUse::SixToThirty));
        assert_eq!(CigarettesPerDay::parse("21-30"), Some(CigarettesPerDay::TwentyOneToThirty));
    }

    #[test]
    fn api_codes_are_accepted() {
        assert_eq!(MinutesToFirstUse::parse("up_to_five"), Some(MinutesToFirstUse::UpToFive));
        assert_eq!(
            MostMissedCigarette::parse("first_of_morning"),
            Some(MostMissedCigarette::FirstOfMorning)
        );
        assert_eq!(
            CigarettesPerDay::parse("thirty_one_or_more"),
            Some(CigarettesPerDay::ThirtyOneOrMore)
        );
    }

    #[test]
    fn unknown_labels_are_unanswered() {
        assert_eq!(MinutesToFirstUse::parse("ontem"), None);
        assert_eq!(MostMissedCigarette::parse(""), None);
        assert_eq!(CigarettesPerDay::parse("40"), None);
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("Sim"));
        assert!(is_affirmative(" yes "));
        assert!(!is_affirmative("Não"));
        assert!(!is_affirmative("talvez"));
    }

    #[test]
    fn from_raw_accepts_booleans_and_text() {
        let raw = RawSurveyAnswers {
            minutes_to_first_use: text("≤ 5 min"),
            difficulty_abstaining_in_forbidden_places: Some(RawAnswer::Flag(true)),
            most_missed_cigarette: text("Outros"),
            cigarettes_per_day: text("11–20"),
            smokes_more_in_morning: text("Sim"),
            smokes_when_ill: text("Não"),
        };

        let answers = SurveyAnswers::from_raw(&raw);
        assert_eq!(answers.minutes_to_first_use, Some(MinutesToFirstUse::UpToFive));
        assert!(answers.difficulty_abstaining_in_forbidden_places);
        assert_eq!(answers.most_missed_cigarette, Some(MostMissedCigarette::Other));
        assert_eq!(answers.cigarettes_per_day, Some(CigarettesPerDay::ElevenToTwenty));
        assert!(answers.smokes_more_in_morning);
        assert!(!answers.smokes_when_ill);
        assert!(answers.is_complete());
    }

    #[test]
    fn from_raw_tolerates_garbage() {
        let raw = RawSurveyAnswers {
            minutes_to_first_use: Some(RawAnswer::Flag(true)),
            cigarettes_per_day: text("muitos"),
            ..Default::default()
        };

        let answers = SurveyAnswers::from_raw(&raw);
        assert_eq!(answers, SurveyAnswers::default());
        assert!(!answers.is_complete());
    }

    #[test]
    fn raw_answers_deserialize_from_mixed_json() {
        let raw: RawSurveyAnswers = serde_json::from_str(
            r#"{"minutes_to_first_use": "6–30 min", "smokes_when_ill": true}"#,
        )
        .unwrap();
        assert_eq!(raw.minutes_to_first_use, text("6–30 min"));
        assert_eq!(raw.smokes_when_ill, Some(RawAnswer::Flag(true)));
        assert_eq!(raw.cigarettes_per_day, None);
    }

    #[test]
    fn non_text_json_values_score_as_unanswered() {
        let raw: RawSurveyAnswers = serde_json::from_str(
            r#"{
                "minutes_to_first_use": 5,
                "smokes_when_ill": 1,
                "smokes_more_in_morning": {"value": true},
                "cigarettes_per_day": ["31 ou mais"]
            }"#,
        )
        .unwrap();
        assert_eq!(raw.smokes_when_ill, Some(RawAnswer::Other(serde_json::json!(1))));
        assert_eq!(SurveyAnswers::from_raw(&raw), SurveyAnswers::default());
    }
}
