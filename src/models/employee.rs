//! Employee model.
//!
//! This module defines the [`Employee`] record: a validated name and hourly
//! rate, plus the identity and hiring date that only a
//! [`Company`](crate::company::Company) may assign when it hires the employee.

use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};

/// Identifier assigned to an employee by the company that hires them.
pub type EmployeeId = u32;

/// Hourly rates an employee may never be created with.
const DISALLOWED_HOURLY_RATES: [Decimal; 5] = [
    Decimal::MAX,
    Decimal::MIN,
    Decimal::ZERO,
    Decimal::ONE,
    Decimal::NEGATIVE_ONE,
];

/// Represents a person who can be hired by a company.
///
/// An employee is created standalone with a name and an hourly rate. The
/// `id` and `hiring_date` stay empty until the employee is hired and are
/// never changed afterwards.
///
/// Two employees are equal when their ids, hiring dates and
/// case-insensitive full names match. Hashing uses the id only.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new("Jane Doe", Decimal::new(102, 1)).unwrap();
/// assert_eq!(employee.full_name(), "Jane Doe");
/// assert_eq!(employee.hourly_salary(), Decimal::new(102, 1));
/// assert!(employee.id().is_none());
/// assert!(!employee.is_hired());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    id: Option<EmployeeId>,
    full_name: String,
    hourly_salary: Decimal,
    hiring_date: Option<NaiveDateTime>,
}

impl Employee {
    /// Creates a new, not yet hired employee.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::EmptyName`] if `full_name` is empty.
    /// - [`LedgerError::InvalidHourlyRate`] if `hourly_salary` is zero, one,
    ///   minus one, or the minimum or maximum representable decimal.
    pub fn new(full_name: impl Into<String>, hourly_salary: Decimal) -> LedgerResult<Self> {
        let full_name = full_name.into();
        if full_name.is_empty() {
            return Err(LedgerError::EmptyName { entity: "employee" });
        }
        if DISALLOWED_HOURLY_RATES.contains(&hourly_salary) {
            return Err(LedgerError::InvalidHourlyRate {
                rate: hourly_salary,
            });
        }

        Ok(Self {
            id: None,
            full_name,
            hourly_salary,
            hiring_date: None,
        })
    }

    /// Returns the company-assigned id, if the employee has been hired.
    pub fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    /// Returns the employee's full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the pay for one full hour of work.
    pub fn hourly_salary(&self) -> Decimal {
        self.hourly_salary
    }

    /// Returns the hiring date, if the employee has been hired.
    pub fn hiring_date(&self) -> Option<NaiveDateTime> {
        self.hiring_date
    }

    /// Returns true once a company has assigned an identity.
    pub fn is_hired(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn assign_identity(&mut self, id: EmployeeId) {
        debug_assert!(self.id.is_none(), "employee identity is assigned once");
        self.id = Some(id);
    }

    pub(crate) fn assign_hiring_date(&mut self, hiring_date: NaiveDateTime) {
        debug_assert!(self.hiring_date.is_none(), "hiring date is assigned once");
        self.hiring_date = Some(hiring_date);
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.full_name.to_lowercase() == other.full_name.to_lowercase()
            && self.hiring_date == other.hiring_date
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
