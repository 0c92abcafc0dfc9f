//! Currency rounding.
//!
//! Every deduction is rounded to a whole won at the point it is computed.
//! Rounding is half away from zero. `Decimal::round_dp` rounds half to even,
//! so the strategy is always passed explicitly.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to a whole currency unit, half away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_won;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_won(Decimal::from_str("13772.325").unwrap()), Decimal::from(13772));
/// assert_eq!(round_won(Decimal::from_str("2.5").unwrap()), Decimal::from(3));
/// assert_eq!(round_won(Decimal::from_str("-2.5").unwrap()), Decimal::from(-3));
/// ```
pub fn round_won(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
