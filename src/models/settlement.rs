//! Settlement models.
//!
//! A settlement pays a crew of daily workers for a period. Each worker
//! contributes a [`SettlementItem`] (man-days worked, daily unit price and
//! any advance already paid). Settling the batch produces one
//! [`SettlementLine`] per worker and the [`SettlementTotals`] across them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_won;

use super::PayrollCalculationResult;

/// One worker's entry in a settlement batch.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SettlementItem;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let item = SettlementItem {
///     worker_id: "w_001".to_string(),
///     worker_name: "Kim".to_string(),
///     man_days: Decimal::from_str("20.5").unwrap(),
///     unit_price: Decimal::from(180_000),
///     advance_deduction: Decimal::ZERO,
/// };
/// assert_eq!(item.gross_pay(), Some(Decimal::from(3_690_000)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementItem {
    /// Unique identifier for the worker.
    pub worker_id: String,
    /// Display name of the worker.
    pub worker_name: String,
    /// Man-days (gongsu) worked in the period; half days are allowed.
    pub man_days: Decimal,
    /// Daily wage for one man-day.
    pub unit_price: Decimal,
    /// Money already paid out ahead of settlement.
    #[serde(default)]
    pub advance_deduction: Decimal,
}

impl SettlementItem {
    /// Gross pay for the period: man-days times unit price, rounded to a
    /// whole currency unit. `None` when the product overflows.
    pub fn gross_pay(&self) -> Option<Decimal> {
        self.man_days.checked_mul(self.unit_price).map(round_won)
    }
}

/// The settled result for one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLine {
    /// Unique identifier for the worker.
    pub worker_id: String,
    /// Display name of the worker.
    pub worker_name: String,
    /// Man-days worked in the period.
    pub man_days: Decimal,
    /// Daily wage for one man-day.
    pub unit_price: Decimal,
    /// Gross pay derived from man-days and unit price.
    pub gross_pay: Decimal,
    /// The deduction breakdown for this worker.
    pub deductions: PayrollCalculationResult,
}

/// Sums across every line of a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettlementTotals {
    /// Total man-days across all workers.
    pub total_man_days: Decimal,
    /// Total gross pay.
    pub total_gross_pay: Decimal,
    /// Total of the four insurance deductions.
    pub total_insurance: Decimal,
    /// Total income tax withheld.
    pub total_income_tax: Decimal,
    /// Total advance payments offset.
    pub total_advance_deduction: Decimal,
    /// Total of all deductions.
    pub total_deduction: Decimal,
    /// Total net pay.
    pub total_net_pay: Decimal,
}

impl SettlementTotals {
    /// Returns these totals with one settled line added, or `None` if any
    /// sum overflows.
    pub fn checked_add(&self, line: &SettlementLine) -> Option<Self> {
        Some(Self {
            total_man_days: self.total_man_days.checked_add(line.man_days)?,
            total_gross_pay: self.total_gross_pay.checked_add(line.gross_pay)?,
            total_insurance: self
                .total_insurance
                .checked_add(line.deductions.total_insurance)?,
            total_income_tax: self.total_income_tax.checked_add(line.deductions.income_tax)?,
            total_advance_deduction: self
                .total_advance_deduction
                .checked_add(line.deductions.advance_deduction)?,
            total_deduction: self.total_deduction.checked_add(line.deductions.total_deduction)?,
            total_net_pay: self.total_net_pay.checked_add(line.deductions.net_pay)?,
        })
    }
}

/// The result of settling a batch of workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSummary {
    /// One line per worker, in input order.
    pub lines: Vec<SettlementLine>,
    /// Totals across all lines.
    pub totals: SettlementTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_item(man_days: &str, unit_price: &str) -> SettlementItem {
        SettlementItem {
            worker_id: "w_001".to_string(),
            worker_name: "Kim".to_string(),
            man_days: dec(man_days),
            unit_price: dec(unit_price),
            advance_deduction: Decimal::ZERO,
        }
    }

    #[test]
    fn test_gross_pay_whole_days() {
        let item = create_item("20", "150000");
        assert_eq!(item.gross_pay(), Some(dec("3000000")));
    }

    #[test]
    fn test_gross_pay_half_day() {
        let item = create_item("0.5", "175001");
        // 87500.5 rounds away from zero
        assert_eq!(item.gross_pay(), Some(dec("87501")));
    }

    #[test]
    fn test_gross_pay_zero_days() {
        let item = create_item("0", "180000");
        assert_eq!(item.gross_pay(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_gross_pay_overflow_is_none() {
        let item = create_item("79228162514264337593543950335", "2");
        assert_eq!(item.gross_pay(), None);
    }

    #[test]
    fn test_deserialize_item_without_advance() {
        let json = r#"{
            "worker_id": "w_002",
            "worker_name": "Lee",
            "man_days": "12.5",
            "unit_price": "200000"
        }"#;

        let item: SettlementItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.advance_deduction, Decimal::ZERO);
        assert_eq!(item.gross_pay(), Some(dec("2500000")));
    }

    fn create_line(gross_pay: Decimal, deductions: PayrollCalculationResult) -> SettlementLine {
        SettlementLine {
            worker_id: "w_001".to_string(),
            worker_name: "Kim".to_string(),
            man_days: dec("1"),
            unit_price: gross_pay,
            gross_pay,
            deductions,
        }
    }

    #[test]
    fn test_totals_checked_add() {
        let deductions = PayrollCalculationResult {
            total_insurance: dec("100"),
            income_tax: dec("33"),
            advance_deduction: dec("10"),
            total_deduction: dec("143"),
            net_pay: dec("857"),
            ..PayrollCalculationResult::ZERO
        };
        let line = create_line(dec("1000"), deductions);

        let totals = SettlementTotals::default()
            .checked_add(&line)
            .and_then(|totals| totals.checked_add(&line))
            .unwrap();

        assert_eq!(totals.total_man_days, dec("2"));
        assert_eq!(totals.total_gross_pay, dec("2000"));
        assert_eq!(totals.total_insurance, dec("200"));
        assert_eq!(totals.total_income_tax, dec("66"));
        assert_eq!(totals.total_advance_deduction, dec("20"));
        assert_eq!(totals.total_deduction, dec("286"));
        assert_eq!(totals.total_net_pay, dec("1714"));
    }

    #[test]
    fn test_totals_checked_add_overflow_is_none() {
        let line = create_line(Decimal::MAX, PayrollCalculationResult::ZERO);

        let once = SettlementTotals::default().checked_add(&line).unwrap();
        assert_eq!(once.total_gross_pay, Decimal::MAX);
        assert_eq!(once.checked_add(&line), None);
    }
}
