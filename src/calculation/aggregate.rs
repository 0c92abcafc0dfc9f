//! Net pay aggregation across workers.

use rust_decimal::Decimal;

use crate::models::PayrollCalculationInput;

use super::payroll::calculate_payroll;

/// Sums the net pay of a sequence of items.
///
/// Each item is mapped to a gross pay and an advance deduction through the
/// two selectors, run through [`calculate_payroll`] with the default
/// insurance config and tax rate, and the resulting net pay values are
/// summed. An empty sequence sums to zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_total_net_pay;
/// use rust_decimal::Decimal;
///
/// struct Row { gross: Decimal, advance: Decimal }
///
/// let rows = vec![
///     Row { gross: Decimal::from(3_000_000), advance: Decimal::ZERO },
///     Row { gross: Decimal::from(3_000_000), advance: Decimal::from(100_000) },
/// ];
///
/// let total = calculate_total_net_pay(&rows, |r| r.gross, |r| r.advance);
/// assert_eq!(total, Decimal::from(2_618_878 + 2_518_878));
///
/// let empty: Vec<Row> = vec![];
/// assert_eq!(calculate_total_net_pay(&empty, |r| r.gross, |r| r.advance), Decimal::ZERO);
/// ```
pub fn calculate_total_net_pay<T, G, A>(
    items: &[T],
    gross_pay_selector: G,
    advance_selector: A,
) -> Decimal
where
    G: Fn(&T) -> Decimal,
    A: Fn(&T) -> Decimal,
{
    items
        .iter()
        .map(|item| {
            let input =
                PayrollCalculationInput::new(gross_pay_selector(item), advance_selector(item));
            calculate_payroll(&input).net_pay
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SettlementItem;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(worker_id: &str, man_days: &str, unit_price: &str, advance: &str) -> SettlementItem {
        SettlementItem {
            worker_id: worker_id.to_string(),
            worker_name: worker_id.to_uppercase(),
            man_days: dec(man_days),
            unit_price: dec(unit_price),
            advance_deduction: dec(advance),
        }
    }

    fn gross(item: &SettlementItem) -> Decimal {
        item.gross_pay().unwrap()
    }

    #[test]
    fn test_empty_sequence_is_zero() {
        let items: Vec<SettlementItem> = vec![];
        let total = calculate_total_net_pay(&items, gross, |i| i.advance_deduction);
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_single_item_matches_calculator() {
        let items = vec![item("w_001", "20", "150000", "0")];
        let total = calculate_total_net_pay(&items, gross, |i| i.advance_deduction);
        assert_eq!(total, dec("2618878"));
    }

    #[test]
    fn test_sum_of_individual_results() {
        let items = vec![
            item("w_001", "20", "150000", "0"),
            item("w_002", "22.5", "180000", "300000"),
            item("w_003", "3", "200000", "700000"),
        ];

        let expected: Decimal = items
            .iter()
            .map(|i| {
                calculate_payroll(&PayrollCalculationInput::new(gross(i), i.advance_deduction))
                    .net_pay
            })
            .sum();

        let total = calculate_total_net_pay(&items, gross, |i| i.advance_deduction);
        assert_eq!(total, expected);
    }

    #[test]
    fn test_negative_net_pay_reduces_total() {
        let items = vec![
            item("w_001", "20", "150000", "0"),
            item("w_002", "1", "100000", "500000"),
        ];

        let total = calculate_total_net_pay(&items, gross, |i| i.advance_deduction);
        assert!(total < dec("2618878"));
    }

    #[test]
    fn test_selectors_on_tuples() {
        let rows = [(dec("3000000"), dec("0")), (dec("0"), dec("0"))];
        let total = calculate_total_net_pay(&rows, |r| r.0, |r| r.1);
        assert_eq!(total, dec("2618878"));
    }
}
