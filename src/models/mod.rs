//! Core data models for the payroll ledger.
//!
//! This module contains the domain records shared by the company, the
//! calculation functions and the report renderer.

mod employee;
mod monthly_report;

pub use employee::{Employee, EmployeeId};
pub use monthly_report::MonthlyReportData;
