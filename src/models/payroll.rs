//! Payroll calculation input and result models.
//!
//! [`PayrollCalculationInput`] carries what the settlement screen knows about
//! one worker for one period. [`PayrollCalculationResult`] is the deduction
//! breakdown produced from it. Neither has a lifecycle beyond a single call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::insurance_config::{DEFAULT_INCOME_TAX_RATE, InsuranceRateConfig};

/// Input to the payroll deduction calculator.
///
/// `insurance_config` and `tax_rate` are optional; when absent the default
/// rates are used. A supplied config replaces the default wholesale.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollCalculationInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PayrollCalculationInput::new(Decimal::from(3_000_000), Decimal::ZERO)
///     .with_tax_rate(Decimal::from_str("0.033").unwrap());
/// assert_eq!(input.effective_tax_rate(), Decimal::from_str("0.033").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculationInput {
    /// Gross pay for the settlement period.
    pub gross_pay: Decimal,
    /// Money already paid out ahead of settlement.
    #[serde(default)]
    pub advance_deduction: Decimal,
    /// Insurance rates, or `None` for the defaults.
    #[serde(default)]
    pub insurance_config: Option<InsuranceRateConfig>,
    /// Income tax rate, or `None` for the default 3.3%.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}

impl PayrollCalculationInput {
    /// Creates an input using the default insurance config and tax rate.
    pub fn new(gross_pay: Decimal, advance_deduction: Decimal) -> Self {
        Self {
            gross_pay,
            advance_deduction,
            insurance_config: None,
            tax_rate: None,
        }
    }

    /// Replaces the insurance configuration.
    pub fn with_insurance_config(mut self, config: InsuranceRateConfig) -> Self {
        self.insurance_config = Some(config);
        self
    }

    /// Replaces the income tax rate.
    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = Some(tax_rate);
        self
    }

    /// Returns the insurance config that will be applied.
    pub fn effective_insurance_config(&self) -> InsuranceRateConfig {
        self.insurance_config.unwrap_or_default()
    }

    /// Returns the income tax rate that will be applied.
    pub fn effective_tax_rate(&self) -> Decimal {
        self.tax_rate.unwrap_or(DEFAULT_INCOME_TAX_RATE)
    }
}

/// The deduction breakdown for one worker and one settlement period.
///
/// Every monetary field is a whole currency unit except `advance_deduction`,
/// which is passed through as supplied. `net_pay` is not clamped and may be
/// negative when deductions exceed gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculationResult {
    /// National pension deduction.
    pub pension: Decimal,
    /// Health insurance deduction.
    pub health: Decimal,
    /// Long-term care deduction, derived from `health`.
    pub care: Decimal,
    /// Employment insurance deduction.
    pub employment: Decimal,
    /// Sum of the four insurance deductions.
    pub total_insurance: Decimal,
    /// Income tax withholding.
    pub income_tax: Decimal,
    /// Advance payment offset.
    pub advance_deduction: Decimal,
    /// Insurance, income tax and advance combined.
    pub total_deduction: Decimal,
    /// Gross pay minus total deduction.
    pub net_pay: Decimal,
}

impl PayrollCalculationResult {
    /// A result with every field zero.
    pub const ZERO: Self = Self {
        pension: Decimal::ZERO,
        health: Decimal::ZERO,
        care: Decimal::ZERO,
        employment: Decimal::ZERO,
        total_insurance: Decimal::ZERO,
        income_tax: Decimal::ZERO,
        advance_deduction: Decimal::ZERO,
        total_deduction: Decimal::ZERO,
        net_pay: Decimal::ZERO,
    };
}
