//! Intake handlers.

mod get_intake;
mod submit_intake;

pub use get_intake::{GetIntakeHandler, GetIntakeQuery, IntakeView};
pub use submit_intake::{SubmitIntakeCommand, SubmitIntakeHandler, SubmitIntakeResult};
