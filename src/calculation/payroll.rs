//! Payroll deduction calculation.
//!
//! This module is the entry point of the engine: it maps one
//! [`PayrollCalculationInput`] to a [`PayrollCalculationResult`].
//!
//! The steps run in a fixed order and each monetary value is rounded to a
//! whole won as it is produced:
//!
//! 1. pension, health, long-term care (from rounded health), employment
//! 2. total insurance
//! 3. income tax
//! 4. total deduction = insurance + income tax + advance
//! 5. net pay = gross pay - total deduction
//!
//! Gross pay and advance deduction are not validated. Negative or
//! fractional values go through the same arithmetic and net pay is never
//! clamped.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, PayrollCalculationInput, PayrollCalculationResult,
};

use super::income_tax::{calculate_income_tax, calculate_income_tax_with_audit};
use super::insurance::{
    InsuranceDeductions, calculate_insurance, calculate_insurance_with_audit,
};
use super::rounding::round_won;

/// Calculates the deduction breakdown for one worker.
///
/// Missing insurance config or tax rate fall back to the defaults. The
/// function is pure: identical inputs always give identical results.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::models::PayrollCalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollCalculationInput::new(Decimal::from(3_000_000), Decimal::ZERO);
/// let result = calculate_payroll(&input);
///
/// assert_eq!(result.total_insurance, Decimal::from(282_122));
/// assert_eq!(result.income_tax, Decimal::from(99_000));
/// assert_eq!(result.total_deduction, Decimal::from(381_122));
/// assert_eq!(result.net_pay, Decimal::from(2_618_878));
/// ```
///
/// # Panics
///
/// Panics if an intermediate amount leaves the `Decimal` range. Use
/// [`checked_calculate_payroll`] for amounts that come from outside.
pub fn calculate_payroll(input: &PayrollCalculationInput) -> PayrollCalculationResult {
    let config = input.effective_insurance_config();
    let insurance = calculate_insurance(input.gross_pay, &config);
    let income_tax = calculate_income_tax(input.gross_pay, input.effective_tax_rate());

    let result = assemble(input, &insurance, income_tax);

    debug!(
        gross_pay = %input.gross_pay,
        net_pay = %result.net_pay,
        "Payroll deductions calculated"
    );

    result
}

/// Calculates the deduction breakdown, failing instead of overflowing.
///
/// Runs the same steps as [`calculate_payroll`] with checked arithmetic and
/// returns the same result whenever every amount stays in range.
///
/// # Errors
///
/// Returns [`EngineError::AmountOverflow`] naming the first step whose
/// amount does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::checked_calculate_payroll;
/// use payroll_engine::models::PayrollCalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollCalculationInput::new(Decimal::from(3_000_000), Decimal::ZERO);
/// assert_eq!(checked_calculate_payroll(&input)?.net_pay, Decimal::from(2_618_878));
///
/// let huge = PayrollCalculationInput::new(Decimal::MAX, Decimal::ZERO)
///     .with_tax_rate(Decimal::from(2));
/// assert!(checked_calculate_payroll(&huge).is_err());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn checked_calculate_payroll(
    input: &PayrollCalculationInput,
) -> EngineResult<PayrollCalculationResult> {
    let config = input.effective_insurance_config();
    let gross = input.gross_pay;
    let overflow = |step: &str| EngineError::AmountOverflow {
        step: step.to_string(),
    };
    let rounded = |base: Decimal, rate: Decimal, step: &str| {
        base.checked_mul(rate)
            .map(round_won)
            .ok_or_else(|| overflow(step))
    };

    let pension = rounded(gross, config.pension_rate, "pension")?;
    let health = rounded(gross, config.health_rate, "health")?;
    let care = rounded(health, config.care_rate_of_health, "care")?;
    let employment = rounded(gross, config.employment_rate, "employment")?;
    let income_tax = rounded(gross, input.effective_tax_rate(), "income_tax")?;

    let total_insurance = pension
        .checked_add(health)
        .and_then(|sum| sum.checked_add(care))
        .and_then(|sum| sum.checked_add(employment))
        .ok_or_else(|| overflow("total_insurance"))?;
    let total_deduction = total_insurance
        .checked_add(income_tax)
        .and_then(|sum| sum.checked_add(input.advance_deduction))
        .ok_or_else(|| overflow("total_deduction"))?;
    let net_pay = gross
        .checked_sub(total_deduction)
        .ok_or_else(|| overflow("net_pay"))?;

    Ok(PayrollCalculationResult {
        pension,
        health,
        care,
        employment,
        total_insurance,
        income_tax,
        advance_deduction: input.advance_deduction,
        total_deduction,
        net_pay,
    })
}

/// Calculates the deduction breakdown and an audit trace explaining it.
///
/// The numeric result is identical to [`calculate_payroll`]. The trace has
/// one step per deduction line followed by the net pay step, and carries a
/// warning when gross pay or net pay is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_payroll, calculate_payroll_with_audit};
/// use payroll_engine::models::PayrollCalculationInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollCalculationInput::new(Decimal::from(3_000_000), Decimal::ZERO);
/// let (result, trace) = calculate_payroll_with_audit(&input);
///
/// assert_eq!(result, calculate_payroll(&input));
/// assert_eq!(trace.steps.len(), 7);
/// assert_eq!(trace.steps[6].rule_id, "net_pay");
/// ```
pub fn calculate_payroll_with_audit(
    input: &PayrollCalculationInput,
) -> (PayrollCalculationResult, AuditTrace) {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::with_capacity(7);
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let config = input.effective_insurance_config();
    let insurance = calculate_insurance_with_audit(input.gross_pay, &config, step_number);
    step_number += insurance.audit_steps.len() as u32;
    steps.extend(insurance.audit_steps);

    let tax = calculate_income_tax_with_audit(
        input.gross_pay,
        input.effective_tax_rate(),
        step_number,
    );
    steps.push(tax.audit_step);
    step_number += 1;

    let result = assemble(input, &insurance.deductions, tax.income_tax);

    steps.push(AuditStep {
        step_number,
        rule_id: "advance_deduction".to_string(),
        rule_name: "Advance Deduction".to_string(),
        input: serde_json::json!({
            "advance_deduction": input.advance_deduction.to_string()
        }),
        output: serde_json::json!({
            "total_insurance": result.total_insurance.to_string(),
            "income_tax": result.income_tax.to_string(),
            "total_deduction": result.total_deduction.to_string()
        }),
        reasoning: format!(
            "{} + {} + {} = {}",
            result.total_insurance,
            result.income_tax,
            input.advance_deduction,
            result.total_deduction
        ),
    });
    step_number += 1;

    steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": input.gross_pay.to_string(),
            "total_deduction": result.total_deduction.to_string()
        }),
        output: serde_json::json!({
            "net_pay": result.net_pay.to_string()
        }),
        reasoning: format!(
            "{} - {} = {}",
            input.gross_pay, result.total_deduction, result.net_pay
        ),
    });

    if input.gross_pay < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_GROSS_PAY".to_string(),
            message: format!("Gross pay {} is negative", input.gross_pay),
            severity: "medium".to_string(),
        });
    }
    if result.net_pay < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_PAY".to_string(),
            message: format!(
                "Deductions of {} exceed gross pay of {}",
                result.total_deduction, input.gross_pay
            ),
            severity: "high".to_string(),
        });
    }

    let trace = AuditTrace {
        steps,
        warnings,
        duration_us: start_time.elapsed().as_micros() as u64,
    };

    (result, trace)
}

/// Combines the rounded deduction lines into the final result.
fn assemble(
    input: &PayrollCalculationInput,
    insurance: &InsuranceDeductions,
    income_tax: Decimal,
) -> PayrollCalculationResult {
    let total_insurance = insurance.total();
    let total_deduction = total_insurance + income_tax + input.advance_deduction;

    PayrollCalculationResult {
        pension: insurance.pension,
        health: insurance.health,
        care: insurance.care,
        employment: insurance.employment,
        total_insurance,
        income_tax,
        advance_deduction: input.advance_deduction,
        total_deduction,
        net_pay: input.gross_pay - total_deduction,
    }
}
