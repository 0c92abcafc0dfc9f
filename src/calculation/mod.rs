//! Calculation logic for the Payroll Deduction Engine.
//!
//! This module contains the payroll deduction calculator and its steps:
//! currency rounding, the four social insurance deductions, income tax
//! withholding, net pay aggregation across workers, batch settlement of a
//! crew, and display formatting for rates and amounts.

mod aggregate;
mod format;
mod income_tax;
mod insurance;
mod payroll;
mod rounding;
mod settlement;

pub use aggregate::calculate_total_net_pay;
pub use format::{
    DEFAULT_PERCENT_DECIMAL_PLACES, format_currency, format_rate_as_percent,
    format_rate_as_percent_default,
};
pub use income_tax::{IncomeTaxResult, calculate_income_tax, calculate_income_tax_with_audit};
pub use insurance::{
    InsuranceDeductions, InsuranceResult, calculate_insurance, calculate_insurance_with_audit,
};
pub use payroll::{calculate_payroll, calculate_payroll_with_audit, checked_calculate_payroll};
pub use rounding::round_won;
pub use settlement::{settle, validate_settlement_item};
