//! Display formatting for rates and currency amounts.
//!
//! These helpers produce the strings shown on settlement statements:
//! rates as percentages (`4.5%`) and amounts with thousands separators
//! (`1,000,000`). No currency symbol is added.

use rust_decimal::{Decimal, RoundingStrategy};

use super::rounding::round_won;

/// Decimal places used by [`format_rate_as_percent_default`].
pub const DEFAULT_PERCENT_DECIMAL_PLACES: u32 = 1;

/// Formats a decimal fraction as a percentage with exactly
/// `decimal_places` digits after the point.
///
/// The value is rounded half away from zero, never truncated.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::format_rate_as_percent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_rate_as_percent(Decimal::from_str("0.045").unwrap(), 1), "4.5%");
/// assert_eq!(format_rate_as_percent(Decimal::from_str("0.03545").unwrap(), 2), "3.55%");
/// assert_eq!(format_rate_as_percent(Decimal::from_str("0.1").unwrap(), 2), "10.00%");
/// ```
pub fn format_rate_as_percent(rate: Decimal, decimal_places: u32) -> String {
    let mut percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    percent.rescale(decimal_places);
    format!("{}%", percent)
}

/// Formats a rate as a percentage with one decimal place.
pub fn format_rate_as_percent_default(rate: Decimal) -> String {
    format_rate_as_percent(rate, DEFAULT_PERCENT_DECIMAL_PLACES)
}

/// Formats a currency amount as a whole number with thousands separators.
///
/// Fractional amounts are rounded to a whole unit first.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(1_000_000)), "1,000,000");
/// assert_eq!(format_currency(Decimal::ZERO), "0");
/// assert_eq!(format_currency(Decimal::from(-1_234)), "-1,234");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_won(amount);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_percent_default_places() {
        assert_eq!(format_rate_as_percent_default(dec("0.045")), "4.5%");
        assert_eq!(format_rate_as_percent_default(dec("0.009")), "0.9%");
        assert_eq!(format_rate_as_percent_default(dec("0.033")), "3.3%");
    }

    #[test]
    fn test_percent_rounds_instead_of_truncating() {
        assert_eq!(format_rate_as_percent(dec("0.03545"), 2), "3.55%");
        assert_eq!(format_rate_as_percent(dec("0.03545"), 1), "3.5%");
        assert_eq!(format_rate_as_percent(dec("0.1295"), 1), "13.0%");
    }

    #[test]
    fn test_percent_pads_trailing_zeros() {
        assert_eq!(format_rate_as_percent(dec("0.05"), 2), "5.00%");
        assert_eq!(format_rate_as_percent(Decimal::ZERO, 1), "0.0%");
    }

    #[test]
    fn test_percent_zero_places() {
        assert_eq!(format_rate_as_percent(dec("0.045"), 0), "5%");
    }

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(dec("1000000")), "1,000,000");
        assert_eq!(format_currency(dec("2618878")), "2,618,878");
        assert_eq!(format_currency(dec("999")), "999");
        assert_eq!(format_currency(dec("1000")), "1,000");
        assert_eq!(format_currency(dec("100000")), "100,000");
    }

    #[test]
    fn test_currency_zero() {
        assert_eq!(format_currency(Decimal::ZERO), "0");
        assert_eq!(format_currency(dec("0.000")), "0");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(dec("-1234567")), "-1,234,567");
        assert_eq!(format_currency(dec("-12")), "-12");
    }

    #[test]
    fn test_currency_rounds_fractional_amounts() {
        assert_eq!(format_currency(dec("873.5")), "874");
        assert_eq!(format_currency(dec("1234.49")), "1,234");
        assert_eq!(format_currency(dec("-0.4")), "0");
    }
}
