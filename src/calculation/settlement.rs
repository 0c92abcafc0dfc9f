//! Batch settlement of a crew of daily workers.
//!
//! Settling turns each worker's man-days and unit price into gross pay, runs
//! the deduction calculator with the rate table in force, and totals the
//! result across the crew.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{SettlementItem, SettlementLine, SettlementSummary, SettlementTotals};

use super::payroll::checked_calculate_payroll;

/// Checks a settlement line before it is settled.
///
/// The calculator itself accepts any values. This check exists for callers
/// receiving lines from outside, such as the HTTP API, and rejects an empty
/// `worker_id`, negative man-days, unit price or advance, and a gross pay
/// that overflows.
pub fn validate_settlement_item(item: &SettlementItem) -> EngineResult<()> {
    if item.worker_id.trim().is_empty() {
        return Err(EngineError::InvalidSettlement {
            worker_id: item.worker_id.clone(),
            message: "worker_id must not be empty".to_string(),
        });
    }

    let checks = [
        ("man_days", item.man_days),
        ("unit_price", item.unit_price),
        ("advance_deduction", item.advance_deduction),
    ];
    for (field, value) in checks {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidSettlement {
                worker_id: item.worker_id.clone(),
                message: format!("{} must not be negative, got {}", field, value),
            });
        }
    }

    if item.gross_pay().is_none() {
        return Err(out_of_range(item, "man_days x unit_price"));
    }

    Ok(())
}

/// Settles a batch of workers against one rate table.
///
/// Lines are returned in input order. Totals are plain sums of the lines;
/// an empty batch has all-zero totals.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSettlement`] for the first worker whose
/// gross pay, deductions or contribution to the totals leaves the
/// `Decimal` range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::settle;
/// use payroll_engine::config::RateTable;
/// use payroll_engine::models::SettlementItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![SettlementItem {
///     worker_id: "w_001".to_string(),
///     worker_name: "Kim".to_string(),
///     man_days: Decimal::from(20),
///     unit_price: Decimal::from(150_000),
///     advance_deduction: Decimal::ZERO,
/// }];
///
/// let summary = settle(&items, &RateTable::default())?;
/// assert_eq!(summary.lines[0].gross_pay, Decimal::from(3_000_000));
/// assert_eq!(summary.totals.total_net_pay, Decimal::from(2_618_878));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn settle(items: &[SettlementItem], rates: &RateTable) -> EngineResult<SettlementSummary> {
    let mut totals = SettlementTotals::default();
    let mut lines: Vec<SettlementLine> = Vec::with_capacity(items.len());

    for item in items {
        let line = settle_item(item, rates)?;
        totals = totals
            .checked_add(&line)
            .ok_or_else(|| out_of_range(item, "settlement totals"))?;
        lines.push(line);
    }

    debug!(
        workers = lines.len(),
        effective_date = %rates.effective_date,
        total_net_pay = %totals.total_net_pay,
        "Settlement batch calculated"
    );

    Ok(SettlementSummary { lines, totals })
}

fn settle_item(item: &SettlementItem, rates: &RateTable) -> EngineResult<SettlementLine> {
    let gross_pay = item
        .gross_pay()
        .ok_or_else(|| out_of_range(item, "gross pay"))?;
    let deductions = checked_calculate_payroll(&rates.to_input(gross_pay, item.advance_deduction))
        .map_err(|err| EngineError::InvalidSettlement {
            worker_id: item.worker_id.clone(),
            message: err.to_string(),
        })?;

    Ok(SettlementLine {
        worker_id: item.worker_id.clone(),
        worker_name: item.worker_name.clone(),
        man_days: item.man_days,
        unit_price: item.unit_price,
        gross_pay,
        deductions,
    })
}

fn out_of_range(item: &SettlementItem, what: &str) -> EngineError {
    EngineError::InvalidSettlement {
        worker_id: item.worker_id.clone(),
        message: format!("{} out of range", what),
    }
}
