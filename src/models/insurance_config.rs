//! Insurance rate configuration.
//!
//! This module defines [`InsuranceRateConfig`], the four statutory social
//! insurance rates applied to a worker's gross pay, together with the
//! default rates used when a caller does not supply a configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default national pension rate (4.5%).
pub const DEFAULT_PENSION_RATE: Decimal = Decimal::from_parts(45, 0, 0, false, 3);

/// Default health insurance rate (3.545%).
pub const DEFAULT_HEALTH_RATE: Decimal = Decimal::from_parts(3545, 0, 0, false, 5);

/// Default long-term care rate, applied to the health deduction (12.95%).
pub const DEFAULT_CARE_RATE_OF_HEALTH: Decimal = Decimal::from_parts(1295, 0, 0, false, 4);

/// Default employment insurance rate (0.9%).
pub const DEFAULT_EMPLOYMENT_RATE: Decimal = Decimal::from_parts(9, 0, 0, false, 3);

/// Default income tax withholding rate for daily workers (3.3%).
pub const DEFAULT_INCOME_TAX_RATE: Decimal = Decimal::from_parts(33, 0, 0, false, 3);

/// The four social insurance rates applied during payroll settlement.
///
/// All four rates are required. A configuration is either supplied in full
/// or not at all, in which case [`InsuranceRateConfig::default`] is used.
///
/// # Example
///
/// ```
/// use payroll_engine::models::InsuranceRateConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = InsuranceRateConfig::default();
/// assert_eq!(config.pension_rate, Decimal::from_str("0.045").unwrap());
/// assert_eq!(config.care_rate_of_health, Decimal::from_str("0.1295").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceRateConfig {
    /// National pension rate applied to gross pay.
    pub pension_rate: Decimal,
    /// Health insurance rate applied to gross pay.
    pub health_rate: Decimal,
    /// Long-term care rate applied to the rounded health deduction.
    pub care_rate_of_health: Decimal,
    /// Employment insurance rate applied to gross pay.
    pub employment_rate: Decimal,
}

impl InsuranceRateConfig {
    /// Creates a configuration from the four rates.
    pub fn new(
        pension_rate: Decimal,
        health_rate: Decimal,
        care_rate_of_health: Decimal,
        employment_rate: Decimal,
    ) -> Self {
        Self {
            pension_rate,
            health_rate,
            care_rate_of_health,
            employment_rate,
        }
    }

    /// Returns each rate paired with its field name, in calculation order.
    pub fn named_rates(&self) -> [(&'static str, Decimal); 4] {
        [
            ("pension_rate", self.pension_rate),
            ("health_rate", self.health_rate),
            ("care_rate_of_health", self.care_rate_of_health),
            ("employment_rate", self.employment_rate),
        ]
    }
}

impl Default for InsuranceRateConfig {
    fn default() -> Self {
        Self {
            pension_rate: DEFAULT_PENSION_RATE,
            health_rate: DEFAULT_HEALTH_RATE,
            care_rate_of_health: DEFAULT_CARE_RATE_OF_HEALTH,
            employment_rate: DEFAULT_EMPLOYMENT_RATE,
        }
    }
}
