//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validation (JWT, mock)
//! - `http` - REST API over axum
//! - `memory` - In-process repositories and seed content
//! - `postgres` - PostgreSQL repositories
//! - `websocket` - Live chat fan-out

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod websocket;
