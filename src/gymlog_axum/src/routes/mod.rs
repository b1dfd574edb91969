//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, run the
//! corresponding use case, and convert results to Axum responses.

pub mod authenticate;
pub mod check_in;
pub mod count_check_ins;
pub mod error;
pub mod register;

pub use authenticate::authenticate;
pub use check_in::check_in;
pub use count_check_ins::count_check_ins;
pub use error::{ApiError, ErrorResponse};
pub use register::register;
