//! Social insurance deduction calculation.
//!
//! This module computes the four statutory insurance deductions (national
//! pension, health, long-term care and employment) from a worker's gross
//! pay. Long-term care is a percentage of the rounded health deduction, not
//! of gross pay, so any rounding in `health` carries into `care`.

use rust_decimal::Decimal;

use crate::models::{AuditStep, InsuranceRateConfig};

use super::rounding::round_won;

/// The four insurance deductions for one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsuranceDeductions {
    /// National pension deduction.
    pub pension: Decimal,
    /// Health insurance deduction.
    pub health: Decimal,
    /// Long-term care deduction.
    pub care: Decimal,
    /// Employment insurance deduction.
    pub employment: Decimal,
}

impl InsuranceDeductions {
    /// Sum of the four deductions.
    pub fn total(&self) -> Decimal {
        self.pension + self.health + self.care + self.employment
    }
}

/// The insurance deductions together with the audit steps describing them.
#[derive(Debug, Clone)]
pub struct InsuranceResult {
    /// The computed deductions.
    pub deductions: InsuranceDeductions,
    /// One audit step per deduction, in calculation order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the four insurance deductions.
///
/// Each deduction is rounded to a whole currency unit as soon as it is
/// computed. `care` is derived from the already-rounded `health`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_insurance;
/// use payroll_engine::models::InsuranceRateConfig;
/// use rust_decimal::Decimal;
///
/// let deductions = calculate_insurance(Decimal::from(3_000_000), &InsuranceRateConfig::default());
///
/// assert_eq!(deductions.pension, Decimal::from(135_000));
/// assert_eq!(deductions.health, Decimal::from(106_350));
/// assert_eq!(deductions.care, Decimal::from(13_772));
/// assert_eq!(deductions.employment, Decimal::from(27_000));
/// assert_eq!(deductions.total(), Decimal::from(282_122));
/// ```
pub fn calculate_insurance(gross_pay: Decimal, config: &InsuranceRateConfig) -> InsuranceDeductions {
    let pension = round_won(gross_pay * config.pension_rate);
    let health = round_won(gross_pay * config.health_rate);
    let care = round_won(health * config.care_rate_of_health);
    let employment = round_won(gross_pay * config.employment_rate);

    InsuranceDeductions {
        pension,
        health,
        care,
        employment,
    }
}

/// Calculates the insurance deductions and records an audit step for each.
///
/// # Arguments
///
/// * `gross_pay` - Gross pay for the settlement period
/// * `config` - The insurance rates to apply
/// * `step_number` - The step number of the first audit step
///
/// The returned audit steps are numbered consecutively from `step_number`.
pub fn calculate_insurance_with_audit(
    gross_pay: Decimal,
    config: &InsuranceRateConfig,
    step_number: u32,
) -> InsuranceResult {
    let deductions = calculate_insurance(gross_pay, config);

    let audit_steps = vec![
        rate_step(
            step_number,
            "national_pension",
            "National Pension",
            "gross_pay",
            gross_pay,
            config.pension_rate,
            "pension",
            deductions.pension,
        ),
        rate_step(
            step_number + 1,
            "health_insurance",
            "Health Insurance",
            "gross_pay",
            gross_pay,
            config.health_rate,
            "health",
            deductions.health,
        ),
        rate_step(
            step_number + 2,
            "long_term_care",
            "Long-Term Care Insurance",
            "health",
            deductions.health,
            config.care_rate_of_health,
            "care",
            deductions.care,
        ),
        rate_step(
            step_number + 3,
            "employment_insurance",
            "Employment Insurance",
            "gross_pay",
            gross_pay,
            config.employment_rate,
            "employment",
            deductions.employment,
        ),
    ];

    InsuranceResult {
        deductions,
        audit_steps,
    }
}

/// Builds the audit step for a `round(base * rate)` deduction.
#[allow(clippy::too_many_arguments)]
pub(crate) fn rate_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    base_name: &str,
    base: Decimal,
    rate: Decimal,
    output_name: &str,
    amount: Decimal,
) -> AuditStep {
    let mut input = serde_json::Map::new();
    input.insert(base_name.to_string(), base.normalize().to_string().into());
    input.insert("rate".to_string(), rate.normalize().to_string().into());

    let mut output = serde_json::Map::new();
    output.insert(output_name.to_string(), amount.to_string().into());

    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::Value::Object(input),
        output: serde_json::Value::Object(output),
        reasoning: format!(
            "round({} x {}) = {}",
            base.normalize(),
            rate.normalize(),
            amount
        ),
    }
}
