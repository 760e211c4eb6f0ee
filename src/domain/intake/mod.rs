//! Intake module - the clinical anamnesis collected at onboarding.
//!
//! The form has four steps (`IntakeStep`). Submitting the last step
//! parses the whole `RawIntakeForm` into an `IntakeSubmission`: the
//! identification block goes to the participant profile, the rest
//! (`ClinicalIntake`) is stored per participant, including the scored
//! Fagerström answers.

mod form;
mod sections;
mod steps;

pub use form::{
    parse_date, RawHealthHistory, RawIdentification, RawIntakeForm, RawMotivation,
    RawSmokingHistory,
};
pub use sections::{
    AlcoholUse, ClinicalIntake, FagerstromRecord, HealthHistory, IntakeSubmission, Motivation,
    SmokingHistory, MAX_MOTIVATION_LEVEL,
};
pub use steps::IntakeStep;
