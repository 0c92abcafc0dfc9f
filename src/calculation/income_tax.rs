//! Income tax withholding.
//!
//! Daily workers are withheld a flat percentage of gross pay (3.3% by
//! default, income tax plus local income tax), rounded to a whole won.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::insurance::rate_step;
use super::rounding::round_won;

/// The income tax withholding and the audit step recording it.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The amount withheld.
    pub income_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the income tax withheld from gross pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tax = calculate_income_tax(Decimal::from(3_000_000), Decimal::from_str("0.033").unwrap());
/// assert_eq!(tax, Decimal::from(99_000));
/// ```
pub fn calculate_income_tax(gross_pay: Decimal, tax_rate: Decimal) -> Decimal {
    round_won(gross_pay * tax_rate)
}

/// Calculates the income tax and records an audit step.
pub fn calculate_income_tax_with_audit(
    gross_pay: Decimal,
    tax_rate: Decimal,
    step_number: u32,
) -> IncomeTaxResult {
    let income_tax = calculate_income_tax(gross_pay, tax_rate);

    IncomeTaxResult {
        income_tax,
        audit_step: rate_step(
            step_number,
            "income_tax",
            "Income Tax Withholding",
            "gross_pay",
            gross_pay,
            tax_rate,
            "income_tax",
            income_tax,
        ),
    }
}
