//! Axum integration for the gymlog check-in backend.
//!
//! Route handlers are generic over the port traits from `gymlog_core`; the
//! concrete stores and hasher are injected through Axum state by
//! `gymlog_service`. Domain and use-case errors are translated to HTTP
//! status codes by a single [`routes::ApiError`] type.

pub mod routes;

pub use routes::{ApiError, ErrorResponse};
