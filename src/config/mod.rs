//! Configuration loading for the payroll ledger.
//!
//! This module loads the company name, pay rules and report settings from a
//! YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Loaded company: {}", config.company_name());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompanySettings, DEFAULT_REPORT_TITLE, PayrollConfig, PayrollRules, ReportSettings,
};
