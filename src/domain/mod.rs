//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `assessment` - Fagerström questionnaire and dependence scoring
//! - `participant` - Participant profile and identification
//! - `intake` - Onboarding anamnesis form
//! - `program` - Twelve-week program content and progress
//! - `tracking` - Smoke-free counters, achievements, daily reports
//! - `calendar` - Scheduled events and the month grid
//! - `community` - Support chat messages

pub mod assessment;
pub mod calendar;
pub mod community;
pub mod foundation;
pub mod intake;
pub mod participant;
pub mod program;
pub mod tracking;
