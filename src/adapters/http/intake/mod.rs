//! HTTP adapter for the anamnesis (intake) form.

mod dto;
mod handlers;
mod routes;

pub use dto::SubmitIntakeResponse;
pub use handlers::IntakeHandlers;
pub use routes::intake_routes;
