//! Configuration types for the payroll ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Report title used when none is configured.
pub const DEFAULT_REPORT_TITLE: &str = "Full salary report for each company employee per month.";

/// Company section of the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanySettings {
    /// The company name.
    pub name: String,
}

/// Pay rules applied when work is reported.
///
/// # Example
///
/// ```
/// use payroll_ledger::config::PayrollRules;
/// use rust_decimal::Decimal;
///
/// assert_eq!(PayrollRules::default().weekend_multiplier, Decimal::TWO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollRules {
    /// Multiplier applied to pay for work started on Saturday or Sunday.
    #[serde(default = "default_weekend_multiplier")]
    pub weekend_multiplier: Decimal,
}

fn default_weekend_multiplier() -> Decimal {
    Decimal::TWO
}

impl Default for PayrollRules {
    fn default() -> Self {
        Self {
            weekend_multiplier: default_weekend_multiplier(),
        }
    }
}

/// Report rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportSettings {
    /// The heading printed above text reports.
    #[serde(default = "default_report_title")]
    pub title: String,
}

fn default_report_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: default_report_title(),
        }
    }
}

/// The complete payroll configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Company settings.
    pub company: CompanySettings,
    /// Pay rules.
    #[serde(default)]
    pub rules: PayrollRules,
    /// Report settings.
    #[serde(default)]
    pub report: ReportSettings,
}
