//! HTTP adapter for the twelve program weeks.

mod dto;
mod handlers;
mod routes;

pub use dto::CompleteWeekResponse;
pub use handlers::ProgramHandlers;
pub use routes::program_routes;
