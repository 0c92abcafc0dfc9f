//! Error types for the Payroll Deduction Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate tables or
//! settling a batch of workers. The plain deduction calculator never fails;
//! its checked variant reports amounts beyond the decimal range.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Deduction Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate table is effective on the requested date.
    #[error("No rate table effective on {date}")]
    RateNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// A configured rate is outside the `[0, 1]` range.
    #[error("Invalid rate '{field}': {value} is not a fraction between 0 and 1")]
    InvalidRate {
        /// The name of the rate field.
        field: String,
        /// The offending value.
        value: Decimal,
    },

    /// A settlement line was rejected before calculation.
    #[error("Invalid settlement line for worker '{worker_id}': {message}")]
    InvalidSettlement {
        /// The worker the line belongs to.
        worker_id: String,
        /// A description of what made the line invalid.
        message: String,
    },

    /// An amount left the representable decimal range during calculation.
    #[error("Amount out of range while calculating {step}")]
    AmountOverflow {
        /// The calculation step that overflowed.
        step: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
