//! Service assembly for the gymlog check-in backend.
//!
//! [`CheckInService`] wires concrete stores and a password hasher into the
//! HTTP routes from `gymlog_axum` and runs the result as a standalone
//! server.

pub mod check_in_service;
pub mod helpers;
pub mod telemetry;

pub use check_in_service::CheckInService;
pub use helpers::{configure_postgresql, get_postgres_pool};
