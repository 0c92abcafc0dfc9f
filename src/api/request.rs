//! Request types for the Payroll Deduction Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/settlements` endpoints and the query string for `/rates`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{InsuranceRateConfig, PayrollCalculationInput, SettlementItem};

/// Request body for the `/calculate` endpoint.
///
/// A supplied `insurance_config` must carry all four rates; a partial
/// config is rejected as a missing-field validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationRequest {
    /// Gross pay for the settlement period.
    pub gross_pay: Decimal,
    /// Money already paid out ahead of settlement.
    #[serde(default)]
    pub advance_deduction: Decimal,
    /// Insurance rates, or `None` for the defaults.
    #[serde(default)]
    pub insurance_config: Option<InsuranceRateConfig>,
    /// Income tax rate, or `None` for the default.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
    /// Whether to include the audit trace in the response.
    #[serde(default)]
    pub include_audit: bool,
}

/// Request body for the `/settlements` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementRequest {
    /// The date used to pick the rate table.
    pub settlement_date: NaiveDate,
    /// One entry per worker.
    pub items: Vec<SettlementItem>,
}

/// Query string for the `/rates` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatesQuery {
    /// The date to resolve rates for; the newest table when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl From<CalculationRequest> for PayrollCalculationInput {
    fn from(req: CalculationRequest) -> Self {
        PayrollCalculationInput {
            gross_pay: req.gross_pay,
            advance_deduction: req.advance_deduction,
            insurance_config: req.insurance_config,
            tax_rate: req.tax_rate,
        }
    }
}
