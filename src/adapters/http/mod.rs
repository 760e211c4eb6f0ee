//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own router with `dto`, `handlers` and `routes`;
//! [`router`] mounts them under `/api` behind the auth middleware.

pub mod assessment;
pub mod calendar;
pub mod chat;
pub mod error;
pub mod intake;
pub mod middleware;
pub mod program;
pub mod router;
pub mod tracking;

pub use error::{handle_domain_error, ErrorResponse};
pub use router::{api_routes, app_router, ApiHandlers};
