//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can make a ledger operation fail.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::EmployeeId;

/// Broad classification of a [`LedgerError`].
///
/// Every rejected ledger operation is a caller-input problem and reports
/// [`ErrorKind::InvalidArgument`]. Configuration and rendering failures
/// report [`ErrorKind::Configuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied an argument the ledger cannot accept.
    InvalidArgument,
    /// Configuration could not be loaded or output could not be produced.
    Configuration,
}

/// The main error type for the payroll ledger.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::{ErrorKind, LedgerError};
///
/// let error = LedgerError::EmployeeNotFound {
///     employee_id: 7,
///     company: "Good Company LLC".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "An employee with id 7 does not exist in the company Good Company LLC"
/// );
/// assert_eq!(error.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A company or employee name was empty.
    #[error("A {entity} must have a non-empty name")]
    EmptyName {
        /// What was being named ("company" or "employee").
        entity: &'static str,
    },

    /// The hourly rate is one of the disallowed values.
    #[error("An hourly rate of {rate} is not allowed")]
    InvalidHourlyRate {
        /// The rejected rate.
        rate: Decimal,
    },

    /// A date was one of the representable-range extremes.
    #[error("Incorrect date of {date}")]
    InvalidDate {
        /// The rejected date.
        date: NaiveDateTime,
    },

    /// The employee is already on the company's active roster.
    #[error("An employee with id {employee_id} already exists in the company {company}")]
    DuplicateEmployee {
        /// The id the employee already carries.
        employee_id: EmployeeId,
        /// The company name.
        company: String,
    },

    /// The employee record was hired before and cannot be hired again.
    #[error("Employee record with id {employee_id} has already been hired once")]
    AlreadyHired {
        /// The id assigned by the earlier hire.
        employee_id: EmployeeId,
    },

    /// No active employee has the given id.
    #[error("An employee with id {employee_id} does not exist in the company {company}")]
    EmployeeNotFound {
        /// The id that was looked up.
        employee_id: EmployeeId,
        /// The company name.
        company: String,
    },

    /// The contract end date precedes the hiring date.
    #[error("Contract end date {end} cannot be before hiring date {hired}")]
    ContractEndBeforeHiring {
        /// The requested contract end date.
        end: NaiveDateTime,
        /// The employee's hiring date.
        hired: NaiveDateTime,
    },

    /// Work was reported before the employee's hiring date.
    #[error("Work reported at {start} cannot start before the hiring date {hired}")]
    WorkBeforeHiring {
        /// When the reported work started.
        start: NaiveDateTime,
        /// The employee's hiring date.
        hired: NaiveDateTime,
    },

    /// The reported span would run past midnight.
    #[error(
        "Reported working hours of {hours} and/or minutes of {minutes} exceed the remaining time of the day starting {start}"
    )]
    ExceedsDay {
        /// When the reported work started.
        start: NaiveDateTime,
        /// Reported hours.
        hours: i32,
        /// Reported minutes.
        minutes: i32,
    },

    /// Hours or minutes are outside their allowed range.
    #[error("Reported working hours of {hours} and/or minutes of {minutes} are invalid")]
    InvalidWorkingTime {
        /// Reported hours.
        hours: i32,
        /// Reported minutes.
        minutes: i32,
    },

    /// A salary amount does not fit in the supported decimal range.
    #[error("Salary overflow while computing the {calculation}")]
    SalaryOverflow {
        /// Which amount was being computed.
        calculation: &'static str,
    },

    /// The requested report period is empty, inverted or in the future.
    #[error("Incorrect monthly report period selected: {start} to {end}")]
    InvalidReportPeriod {
        /// Requested period start.
        start: NaiveDateTime,
        /// Requested period end.
        end: NaiveDateTime,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LedgerError {
    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::ConfigNotFound { .. }
            | LedgerError::ConfigParseError { .. }
            | LedgerError::Serialization(_) => ErrorKind::Configuration,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
