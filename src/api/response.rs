//! Response types for the Payroll Deduction Engine API.
//!
//! This module defines the success bodies returned by each endpoint and the
//! error response structures used when a request is rejected.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::calculation::format_rate_as_percent;
use crate::config::RateTable;
use crate::error::EngineError;
use crate::models::{
    AuditTrace, PayrollCalculationInput, PayrollCalculationResult, SettlementLine,
    SettlementTotals,
};

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The input the result was computed from.
    pub input: PayrollCalculationInput,
    /// The deduction breakdown.
    pub result: PayrollCalculationResult,
    /// The audit trace, when requested.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub audit_trace: Option<AuditTrace>,
}

/// Response body for the `/settlements` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementResponse {
    /// Unique identifier for this settlement run.
    pub settlement_id: Uuid,
    /// The settlement date from the request.
    pub settlement_date: NaiveDate,
    /// The effective date of the rate table that was applied.
    pub effective_date: NaiveDate,
    /// One line per worker, in request order.
    pub lines: Vec<SettlementLine>,
    /// Totals across all lines.
    pub totals: SettlementTotals,
}

/// Response body for the `/rates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    /// The rate table in force.
    pub rates: RateTable,
    /// Each rate formatted as a percentage, keyed by field name.
    pub labels: BTreeMap<String, String>,
}

impl From<RateTable> for RatesResponse {
    fn from(rates: RateTable) -> Self {
        let labels = rates
            .named_rates()
            .iter()
            .map(|(name, rate)| (name.to_string(), format_rate_as_percent(*rate, 2)))
            .collect();
        Self { rates, labels }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRate { field, value } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration contains an invalid rate",
                    format!("{} = {}", field, value),
                ),
            },
            EngineError::RateNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATE_NOT_FOUND",
                    format!("No rate table effective on {}", date),
                    "The requested date precedes every configured rate table",
                ),
            },
            EngineError::AmountOverflow { step } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "AMOUNT_OUT_OF_RANGE",
                    format!("Amount out of range while calculating {}", step),
                    "An input amount or rate is too large to calculate with",
                ),
            },
            EngineError::InvalidSettlement { worker_id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SETTLEMENT",
                    format!("Invalid settlement line for worker '{}': {}", worker_id, message),
                    "The settlement data contains invalid information",
                ),
            },
        }
    }
}
