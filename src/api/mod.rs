//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for uploading attendance
//! reports and managing per-employee pay rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ShiftWindowQuery;
pub use response::{ApiError, ReportResponse};
pub use state::AppState;
