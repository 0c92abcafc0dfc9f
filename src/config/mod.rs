//! Configuration loading and management for the Payroll Deduction Engine.
//!
//! Insurance and income tax rates change each January, so they are kept in
//! dated YAML rate tables rather than compiled in. This module loads a rate
//! schedule directory and resolves the table in force on a given date.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kr").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, RateTable, ScheduleMetadata};
