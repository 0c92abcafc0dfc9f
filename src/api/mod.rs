//! HTTP API module for the Payroll Deduction Engine.
//!
//! This module provides the REST API endpoints for calculating statutory
//! deductions, settling a crew of daily workers and looking up the rate
//! table in force on a date.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RatesQuery, SettlementRequest};
pub use response::{ApiError, CalculationResponse, RatesResponse, SettlementResponse};
pub use state::AppState;
