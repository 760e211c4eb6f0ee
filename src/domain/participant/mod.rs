//! Participant module - who is enrolled in the program.

mod profile;

pub use profile::{
    display_name, first_name, PatientIdentification, Sex, UserProfile, ANONYMOUS_NAME,
};
