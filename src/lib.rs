//! Payroll Deduction Engine for Korean daily-wage construction settlements
//!
//! This crate computes the four statutory social insurance deductions,
//! income tax withholding and net pay for each worker in a settlement
//! period, and exposes the calculation over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
