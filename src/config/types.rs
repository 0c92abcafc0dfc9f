//! Configuration types for payroll deduction rates.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_INCOME_TAX_RATE, InsuranceRateConfig, PayrollCalculationInput};

/// Metadata about the rate schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The human-readable name of the schedule.
    pub name: String,
    /// The jurisdiction the rates apply in (e.g., "KR").
    pub jurisdiction: String,
    /// The ISO currency code amounts are expressed in.
    pub currency: String,
}

/// The insurance and income tax rates in force from a given date.
///
/// # Example
///
/// ```
/// use payroll_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::default();
/// let input = table.to_input(Decimal::from(3_000_000), Decimal::ZERO);
/// assert_eq!(input.insurance_config, Some(table.insurance));
/// assert_eq!(input.tax_rate, Some(table.income_tax_rate));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// The first date these rates apply to.
    pub effective_date: NaiveDate,
    /// Income tax withholding rate.
    pub income_tax_rate: Decimal,
    /// The four insurance rates.
    pub insurance: InsuranceRateConfig,
}

impl RateTable {
    /// Builds a fully specified calculator input from this table.
    pub fn to_input(&self, gross_pay: Decimal, advance_deduction: Decimal) -> PayrollCalculationInput {
        PayrollCalculationInput::new(gross_pay, advance_deduction)
            .with_insurance_config(self.insurance)
            .with_tax_rate(self.income_tax_rate)
    }

    /// Returns every rate in the table paired with its field name.
    pub fn named_rates(&self) -> [(&'static str, Decimal); 5] {
        let [pension, health, care, employment] = self.insurance.named_rates();
        [
            pension,
            health,
            care,
            employment,
            ("income_tax_rate", self.income_tax_rate),
        ]
    }
}

impl Default for RateTable {
    /// The built-in default rates, effective from the Unix epoch.
    fn default() -> Self {
        Self {
            effective_date: NaiveDate::default(),
            income_tax_rate: DEFAULT_INCOME_TAX_RATE,
            insurance: InsuranceRateConfig::default(),
        }
    }
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Schedule metadata.
    metadata: ScheduleMetadata,
    /// Rate tables by effective date (sorted oldest first).
    rates: Vec<RateTable>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(metadata: ScheduleMetadata, rates: Vec<RateTable>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns all rate tables, oldest first.
    pub fn rates(&self) -> &[RateTable] {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table(date: &str) -> RateTable {
        RateTable {
            effective_date: NaiveDate::from_str(date).unwrap(),
            ..RateTable::default()
        }
    }

    #[test]
    fn test_deserialize_rate_table_yaml() {
        let yaml = r#"
effective_date: 2025-01-01
income_tax_rate: "0.033"
insurance:
  pension_rate: "0.045"
  health_rate: "0.03545"
  care_rate_of_health: "0.1295"
  employment_rate: "0.009"
"#;

        let table: RateTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            table.effective_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(table.income_tax_rate, dec("0.033"));
        assert_eq!(table.insurance, InsuranceRateConfig::default());
    }

    #[test]
    fn test_partial_insurance_block_is_rejected() {
        let yaml = r#"
effective_date: 2025-01-01
income_tax_rate: "0.033"
insurance:
  pension_rate: "0.045"
  health_rate: "0.03545"
"#;

        let result: Result<RateTable, _> = serde_yaml::from_str(yaml);
        assert!(result.unwrap_err().to_string().contains("missing field"));
    }

    #[test]
    fn test_config_sorts_rates_oldest_first() {
        let metadata = ScheduleMetadata {
            name: "Test".to_string(),
            jurisdiction: "KR".to_string(),
            currency: "KRW".to_string(),
        };
        let config = PayrollConfig::new(
            metadata,
            vec![table("2026-01-01"), table("2024-01-01"), table("2025-01-01")],
        );

        let dates: Vec<String> = config
            .rates()
            .iter()
            .map(|r| r.effective_date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-01-01", "2025-01-01", "2026-01-01"]);
    }

    #[test]
    fn test_to_input_is_fully_specified() {
        let input = RateTable::default().to_input(dec("1000000"), dec("50000"));

        assert_eq!(input.gross_pay, dec("1000000"));
        assert_eq!(input.advance_deduction, dec("50000"));
        assert!(input.insurance_config.is_some());
        assert!(input.tax_rate.is_some());
    }

    #[test]
    fn test_named_rates_include_income_tax() {
        let names: Vec<&str> = RateTable::default()
            .named_rates()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(names.len(), 5);
        assert_eq!(names[4], "income_tax_rate");
    }
}
