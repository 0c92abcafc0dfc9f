//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading dated rate
//! tables from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, RateTable, ScheduleMetadata};

/// Loads and provides access to the payroll rate schedule.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/kr/
/// ├── schedule.yaml        # Schedule metadata
/// └── rates/
///     └── 2025-01-01.yaml  # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/kr")?;
/// let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
/// let rates = loader.rates_for(date)?;
/// println!("Pension rate: {}", rates.insurance.pension_rate);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing, or the rates directory is empty
    /// - Any file contains invalid YAML or is missing a required field
    /// - Any rate lies outside `[0, 1]`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let metadata = Self::load_yaml::<ScheduleMetadata>(&schedule_path)?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        info!(
            schedule = %metadata.name,
            rate_tables = rates.len(),
            path = %path.display(),
            "Loaded payroll rate schedule"
        );

        Ok(Self {
            config: PayrollConfig::new(metadata, rates),
        })
    }

    /// Builds a loader from already-parsed parts, validating every rate.
    pub fn from_parts(metadata: ScheduleMetadata, rates: Vec<RateTable>) -> EngineResult<Self> {
        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: "(no rate tables supplied)".to_string(),
            });
        }
        for table in &rates {
            Self::validate_rates(table)?;
        }
        Ok(Self {
            config: PayrollConfig::new(metadata, rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<RateTable>(&path)?;
                Self::validate_rates(&table)?;
                rates.push(table);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Rejects any rate outside `[0, 1]`.
    fn validate_rates(table: &RateTable) -> EngineResult<()> {
        for (field, value) in table.named_rates() {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(EngineError::InvalidRate {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.config.metadata()
    }

    /// Gets the rate table in force on a given date.
    ///
    /// The method finds the most recent rate table that is effective
    /// on or before the given date.
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.config
            .rates()
            .iter()
            .rev()
            .find(|rt| rt.effective_date <= date)
            .ok_or(EngineError::RateNotFound { date })
    }

    /// Returns the most recent rate table.
    pub fn latest(&self) -> &RateTable {
        // load and from_parts both reject an empty rate list
        &self.config.rates()[self.config.rates().len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InsuranceRateConfig;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/kr"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn metadata() -> ScheduleMetadata {
        ScheduleMetadata {
            name: "Test schedule".to_string(),
            jurisdiction: "KR".to_string(),
            currency: "KRW".to_string(),
        }
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().jurisdiction, "KR");
        assert_eq!(loader.metadata().currency, "KRW");
        assert_eq!(loader.config().rates().len(), 3);
    }

    #[test]
    fn test_rates_for_2025_match_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let table = loader.rates_for(date(2025, 6, 30)).unwrap();
        assert_eq!(table.effective_date, date(2025, 1, 1));
        assert_eq!(table.insurance, InsuranceRateConfig::default());
        assert_eq!(table.income_tax_rate, dec("0.033"));
    }

    #[test]
    fn test_rates_for_effective_date_boundary() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let on_boundary = loader.rates_for(date(2026, 1, 1)).unwrap();
        assert_eq!(on_boundary.effective_date, date(2026, 1, 1));

        let day_before = loader.rates_for(date(2025, 12, 31)).unwrap();
        assert_eq!(day_before.effective_date, date(2025, 1, 1));
    }

    #[test]
    fn test_2026_rates() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let table = loader.rates_for(date(2026, 3, 1)).unwrap();
        assert_eq!(table.insurance.pension_rate, dec("0.0475"));
        assert_eq!(table.insurance.health_rate, dec("0.03595"));
        assert_eq!(table.insurance.care_rate_of_health, dec("0.1314"));
        assert_eq!(table.insurance.employment_rate, dec("0.009"));
    }

    #[test]
    fn test_latest_is_newest_table() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.latest().effective_date, date(2026, 1, 1));
    }

    #[test]
    fn test_rate_not_found_before_first_table() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let result = loader.rates_for(date(2020, 1, 1));
        match result {
            Err(EngineError::RateNotFound { date: d }) => {
                assert_eq!(d, date(2020, 1, 1));
            }
            _ => panic!("Expected RateNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("schedule.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_from_parts_rejects_rate_above_one() {
        let mut table = RateTable::default();
        table.insurance.pension_rate = dec("4.5");

        let result = ConfigLoader::from_parts(metadata(), vec![table]);
        match result {
            Err(EngineError::InvalidRate { field, value }) => {
                assert_eq!(field, "pension_rate");
                assert_eq!(value, dec("4.5"));
            }
            _ => panic!("Expected InvalidRate error"),
        }
    }

    #[test]
    fn test_from_parts_rejects_negative_tax_rate() {
        let mut table = RateTable::default();
        table.income_tax_rate = dec("-0.01");

        let result = ConfigLoader::from_parts(metadata(), vec![table]);
        assert!(matches!(result, Err(EngineError::InvalidRate { .. })));
    }

    #[test]
    fn test_from_parts_rejects_empty_rates() {
        let result = ConfigLoader::from_parts(metadata(), vec![]);
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_from_parts_accepts_defaults() {
        let loader = ConfigLoader::from_parts(metadata(), vec![RateTable::default()]).unwrap();
        assert_eq!(*loader.latest(), RateTable::default());
    }
}
