//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

use super::types::{PayrollConfig, PayrollRules, ReportSettings};

/// Loads and provides access to payroll configuration.
///
/// # File Format
///
/// ```text
/// company:
///   name: Good Company LLC
/// rules:                  # optional
///   weekend_multiplier: "2"
/// report:                 # optional
///   title: Full salary report for each company employee per month.
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::company::Company;
/// use payroll_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// let company = Company::from_config(loader.config())?;
/// println!("Loaded company: {}", company.name());
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::ConfigNotFound`] if the file cannot be read.
    /// - [`LedgerError::ConfigParseError`] if the YAML is invalid, a
    ///   required field is missing, or the weekend multiplier is not
    ///   positive.
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text; `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> LedgerResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| LedgerError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        if config.rules.weekend_multiplier <= Decimal::ZERO {
            return Err(LedgerError::ConfigParseError {
                path: origin.to_string(),
                message: format!(
                    "weekend_multiplier must be positive, got {}",
                    config.rules.weekend_multiplier
                ),
            });
        }

        Ok(Self { config })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configured company name.
    pub fn company_name(&self) -> &str {
        &self.config.company.name
    }

    /// Returns the configured pay rules.
    pub fn rules(&self) -> &PayrollRules {
        &self.config.rules
    }

    /// Returns the configured report settings.
    pub fn report(&self) -> &ReportSettings {
        &self.config.report
    }
}
