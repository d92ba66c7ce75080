//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for computing shift pay and
//! aggregating shift statistics.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ShiftCalculationRequest, StatisticsRequest};
pub use response::{ApiError, CalculationResponse, StatisticsResponse};
pub use state::AppState;
