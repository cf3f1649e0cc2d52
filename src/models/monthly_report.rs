//! Monthly report row model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// Salary earned by one employee in one calendar month.
///
/// The same shape serves as a raw ledger entry (one per reported work
/// session) and as an aggregate report row (one per employee, year and
/// month, with salaries summed).
///
/// # Example
///
/// ```
/// use payroll_ledger::models::MonthlyReportData;
/// use rust_decimal::Decimal;
///
/// let row = MonthlyReportData {
///     employee_id: 1,
///     year: 2021,
///     month: 1,
///     salary: Decimal::new(122, 2),
/// };
/// assert_eq!(row.to_string(), "EmployeeId: 1 Year: 2021 Month: 1 Salary: 1.22");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReportData {
    /// The employee the salary belongs to.
    pub employee_id: EmployeeId,
    /// Calendar year.
    pub year: i32,
    /// The number of the month from 1 to 12.
    pub month: u32,
    /// Salary earned.
    pub salary: Decimal,
}

impl MonthlyReportData {
    /// Returns the (employee, year, month) key rows are grouped by.
    pub fn period_key(&self) -> (EmployeeId, i32, u32) {
        (self.employee_id, self.year, self.month)
    }
}

impl fmt::Display for MonthlyReportData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EmployeeId: {} Year: {} Month: {} Salary: {}",
            self.employee_id, self.year, self.month, self.salary
        )
    }
}
