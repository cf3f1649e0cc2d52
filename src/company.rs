//! Company roster and salary ledger.
//!
//! A [`Company`] hires and removes employees, records reported working
//! time as ledger entries, and aggregates those entries into monthly
//! salary rows. Every operation validates all of its inputs before it
//! changes any state.

use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::{calculate_work_pay, ends_on_later_day};
use crate::config::{PayrollConfig, PayrollRules};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Employee, EmployeeId, MonthlyReportData};

/// A single company: its active employees and its salary ledger.
///
/// # Example
///
/// ```
/// use payroll_ledger::company::Company;
/// use payroll_ledger::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut company = Company::new("Good Company LLC")?;
/// let hired = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let id = company.add_employee(Employee::new("Jane Doe", Decimal::from_str("1.2")?)?, hired)?;
///
/// let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 1, 0).unwrap();
/// company.add_hours(id, start, 1, 1)?;
///
/// let now = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let report = company.get_monthly_report_at(start, now, now)?;
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].salary, Decimal::from_str("1.22")?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Company {
    name: String,
    rules: PayrollRules,
    employees: BTreeMap<EmployeeId, Employee>,
    ledger: Vec<MonthlyReportData>,
}

impl Company {
    /// Creates a company with the default pay rules.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> LedgerResult<Self> {
        Self::with_rules(name, PayrollRules::default())
    }

    /// Creates a company with explicit pay rules.
    pub fn with_rules(name: impl Into<String>, rules: PayrollRules) -> LedgerResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(LedgerError::EmptyName { entity: "company" });
        }

        Ok(Self {
            name,
            rules,
            employees: BTreeMap::new(),
            ledger: Vec::new(),
        })
    }

    /// Creates a company from loaded configuration.
    pub fn from_config(config: &PayrollConfig) -> LedgerResult<Self> {
        Self::with_rules(config.company.name.clone(), config.rules.clone())
    }

    /// Returns the company name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pay rules in effect.
    pub fn rules(&self) -> &PayrollRules {
        &self.rules
    }

    /// Returns a snapshot of the active employees, ordered by id.
    pub fn employees(&self) -> Vec<Employee> {
        self.employees.values().cloned().collect()
    }

    /// Looks up an active employee by id.
    pub fn employee(&self, employee_id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&employee_id)
    }

    /// Returns the raw ledger entries in insertion order.
    pub fn ledger(&self) -> &[MonthlyReportData] {
        &self.ledger
    }

    /// Hires `employee` from `hiring_date` and returns the id assigned to them.
    ///
    /// The new id is one more than the highest active id, or 1 when there
    /// are no active employees.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidDate`] if `hiring_date` is the minimum or
    ///   maximum representable datetime.
    /// - [`LedgerError::DuplicateEmployee`] if the employee is already on
    ///   this company's roster.
    /// - [`LedgerError::AlreadyHired`] if the employee record was hired
    ///   before and is no longer on the roster.
    pub fn add_employee(
        &mut self,
        mut employee: Employee,
        hiring_date: NaiveDateTime,
    ) -> LedgerResult<EmployeeId> {
        self.check_can_hire(&employee, hiring_date)
            .inspect_err(|error| warn!(company = %self.name, %error, "Rejected hire"))?;

        let employee_id = self.next_employee_id();
        employee.assign_identity(employee_id);
        employee.assign_hiring_date(hiring_date);

        info!(
            company = %self.name,
            employee_id,
            full_name = %employee.full_name(),
            hiring_date = %hiring_date,
            "Employee hired"
        );
        self.employees.insert(employee_id, employee);

        Ok(employee_id)
    }

    /// Removes an employee at `contract_end_date` and returns their record.
    ///
    /// Ledger entries of that employee in the calendar month of
    /// `contract_end_date` are deleted; entries in other months are kept.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidDate`] if `contract_end_date` is a range extreme.
    /// - [`LedgerError::EmployeeNotFound`] if no active employee has the id.
    /// - [`LedgerError::ContractEndBeforeHiring`] if the end date precedes
    ///   the hiring date.
    pub fn remove_employee(
        &mut self,
        employee_id: EmployeeId,
        contract_end_date: NaiveDateTime,
    ) -> LedgerResult<Employee> {
        self.check_can_remove(employee_id, contract_end_date)
            .inspect_err(|error| warn!(company = %self.name, %error, "Rejected removal"))?;

        let employee = self
            .employees
            .remove(&employee_id)
            .ok_or_else(|| self.not_found(employee_id))?;

        let (year, month) = (contract_end_date.year(), contract_end_date.month());
        let before = self.ledger.len();
        self.ledger
            .retain(|entry| entry.period_key() != (employee_id, year, month));

        info!(
            company = %self.name,
            employee_id,
            contract_end_date = %contract_end_date,
            removed_entries = before - self.ledger.len(),
            "Employee removed"
        );

        Ok(employee)
    }

    /// Reports `hours` and `minutes` of work starting at `date_and_time`.
    ///
    /// Reporting 1 hour and 30 minutes at 13:00 means the employee worked
    /// from 13:00 to 14:30. Work started on a weekend is paid with the
    /// weekend multiplier. Returns the ledger entry that was recorded.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::EmployeeNotFound`] if no active employee has the id.
    /// - [`LedgerError::WorkBeforeHiring`] if the work starts before the
    ///   hiring date.
    /// - [`LedgerError::ExceedsDay`] if the work would run past midnight.
    /// - [`LedgerError::InvalidWorkingTime`] if `hours` is outside 0..24 or
    ///   `minutes` is outside 0..60.
    /// - [`LedgerError::SalaryOverflow`] if the pay does not fit in a
    ///   [`Decimal`]. Nothing is recorded.
    pub fn add_hours(
        &mut self,
        employee_id: EmployeeId,
        date_and_time: NaiveDateTime,
        hours: i32,
        minutes: i32,
    ) -> LedgerResult<MonthlyReportData> {
        let hourly_salary = self
            .check_working_time(employee_id, date_and_time, hours, minutes)
            .inspect_err(|error| warn!(company = %self.name, %error, "Rejected working time"))?;

        let pay = calculate_work_pay(hourly_salary, hours, minutes, date_and_time, &self.rules)
            .inspect_err(|error| {
                warn!(company = %self.name, employee_id, %error, "Rejected working time")
            })?;
        let entry = MonthlyReportData {
            employee_id,
            year: date_and_time.year(),
            month: date_and_time.month(),
            salary: pay.amount,
        };

        debug!(
            employee_id,
            start = %date_and_time,
            hours,
            minutes,
            day_type = %pay.day_type,
            salary = %pay.amount,
            "Working time recorded"
        );
        self.ledger.push(entry.clone());

        Ok(entry)
    }

    /// Aggregates the ledger into monthly salary rows, using the local
    /// clock as the current moment.
    ///
    /// See [`Company::get_monthly_report_at`].
    pub fn get_monthly_report(
        &self,
        period_start: NaiveDateTime,
        period_end: NaiveDateTime,
    ) -> LedgerResult<Vec<MonthlyReportData>> {
        self.get_monthly_report_at(period_start, period_end, Local::now().naive_local())
    }

    /// Aggregates the ledger into monthly salary rows.
    ///
    /// Rows are grouped by employee, year and month with salaries summed,
    /// and ordered by employee id, then year, then month. The period only
    /// gates validity: every ledger entry is aggregated regardless of
    /// whether it falls inside the period.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidDate`] if either bound is a range extreme.
    /// - [`LedgerError::InvalidReportPeriod`] if `period_end` is not after
    ///   `period_start`, or either bound is after `now`.
    /// - [`LedgerError::SalaryOverflow`] if a monthly total does not fit in
    ///   a [`Decimal`].
    pub fn get_monthly_report_at(
        &self,
        period_start: NaiveDateTime,
        period_end: NaiveDateTime,
        now: NaiveDateTime,
    ) -> LedgerResult<Vec<MonthlyReportData>> {
        check_report_period(period_start, period_end, now)
            .inspect_err(|error| warn!(company = %self.name, %error, "Rejected report request"))?;

        let mut totals: BTreeMap<(EmployeeId, i32, u32), Decimal> = BTreeMap::new();
        for entry in &self.ledger {
            let total = totals.entry(entry.period_key()).or_insert(Decimal::ZERO);
            *total = total
                .checked_add(entry.salary)
                .ok_or(LedgerError::SalaryOverflow {
                    calculation: "monthly total",
                })
                .inspect_err(|error| {
                    warn!(
                        company = %self.name,
                        employee_id = entry.employee_id,
                        %error,
                        "Report aggregation failed"
                    )
                })?;
        }

        let report: Vec<MonthlyReportData> = totals
            .into_iter()
            .map(|((employee_id, year, month), salary)| MonthlyReportData {
                employee_id,
                year,
                month,
                salary: salary.normalize(),
            })
            .collect();

        debug!(
            company = %self.name,
            ledger_entries = self.ledger.len(),
            rows = report.len(),
            "Monthly report aggregated"
        );

        Ok(report)
    }

    fn next_employee_id(&self) -> EmployeeId {
        self.employees
            .last_key_value()
            .map_or(1, |(highest, _)| highest + 1)
    }

    fn not_found(&self, employee_id: EmployeeId) -> LedgerError {
        LedgerError::EmployeeNotFound {
            employee_id,
            company: self.name.clone(),
        }
    }

    fn active_employee(&self, employee_id: EmployeeId) -> LedgerResult<&Employee> {
        self.employees
            .get(&employee_id)
            .ok_or_else(|| self.not_found(employee_id))
    }

    fn check_can_hire(&self, employee: &Employee, hiring_date: NaiveDateTime) -> LedgerResult<()> {
        check_date(hiring_date)?;

        if let Some(employee_id) = employee.id() {
            if self.employees.get(&employee_id) == Some(employee) {
                return Err(LedgerError::DuplicateEmployee {
                    employee_id,
                    company: self.name.clone(),
                });
            }
            return Err(LedgerError::AlreadyHired { employee_id });
        }

        Ok(())
    }

    fn check_can_remove(
        &self,
        employee_id: EmployeeId,
        contract_end_date: NaiveDateTime,
    ) -> LedgerResult<()> {
        check_date(contract_end_date)?;

        let hired = hiring_date_of(self.active_employee(employee_id)?);
        if contract_end_date < hired {
            return Err(LedgerError::ContractEndBeforeHiring {
                end: contract_end_date,
                hired,
            });
        }

        Ok(())
    }

    /// Validates a working time report and returns the employee's hourly rate.
    fn check_working_time(
        &self,
        employee_id: EmployeeId,
        start: NaiveDateTime,
        hours: i32,
        minutes: i32,
    ) -> LedgerResult<Decimal> {
        let employee = self.active_employee(employee_id)?;

        let hired = hiring_date_of(employee);
        if start < hired {
            return Err(LedgerError::WorkBeforeHiring { start, hired });
        }

        if ends_on_later_day(start, hours, minutes) {
            return Err(LedgerError::ExceedsDay {
                start,
                hours,
                minutes,
            });
        }

        if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
            return Err(LedgerError::InvalidWorkingTime { hours, minutes });
        }

        Ok(employee.hourly_salary())
    }
}

// Roster members always carry a hiring date; MIN keeps the comparison total.
fn hiring_date_of(employee: &Employee) -> NaiveDateTime {
    employee.hiring_date().unwrap_or(NaiveDateTime::MIN)
}

fn is_range_extreme(date: NaiveDateTime) -> bool {
    date == NaiveDateTime::MIN || date == NaiveDateTime::MAX
}

fn check_date(date: NaiveDateTime) -> LedgerResult<()> {
    if is_range_extreme(date) {
        return Err(LedgerError::InvalidDate { date });
    }
    Ok(())
}

fn check_report_period(
    start: NaiveDateTime,
    end: NaiveDateTime,
    now: NaiveDateTime,
) -> LedgerResult<()> {
    check_date(start)?;
    check_date(end)?;

    if end <= start || start > now || end > now {
        return Err(LedgerError::InvalidReportPeriod { start, end });
    }

    Ok(())
}
