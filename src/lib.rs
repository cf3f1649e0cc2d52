//! Payroll Ledger
//!
//! This crate tracks the employees of a single company, records their
//! reported working time, and aggregates that time into monthly salary
//! reports, paying weekend work at a configurable multiplier.

#![warn(missing_docs)]

pub mod calculation;
pub mod company;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
