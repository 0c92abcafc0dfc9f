//! Core data models for the Payroll Deduction Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod insurance_config;
mod payroll;
mod settlement;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use insurance_config::{
    DEFAULT_CARE_RATE_OF_HEALTH, DEFAULT_EMPLOYMENT_RATE, DEFAULT_HEALTH_RATE,
    DEFAULT_INCOME_TAX_RATE, DEFAULT_PENSION_RATE, InsuranceRateConfig,
};
pub use payroll::{PayrollCalculationInput, PayrollCalculationResult};
pub use settlement::{SettlementItem, SettlementLine, SettlementSummary, SettlementTotals};
