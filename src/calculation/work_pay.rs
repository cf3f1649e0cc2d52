//! Pay calculation for a single reported work session.
//!
//! Pay is the hourly rate times full hours plus a per-minute share of the
//! hourly rate times minutes. Sessions that start on a Saturday or Sunday
//! are multiplied by the configured weekend multiplier.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::config::PayrollRules;
use crate::error::{LedgerError, LedgerResult};

use super::{DayType, get_day_type};

/// Minutes in one hour, used to derive the per-minute rate.
pub const MINUTES_PER_HOUR: i64 = 60;

/// The result of a work session pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkPayResult {
    /// The day type the session started on.
    pub day_type: DayType,
    /// Pay before any weekend multiplier.
    pub base_amount: Decimal,
    /// The multiplier applied (one on weekdays).
    pub multiplier: Decimal,
    /// Final pay for the session, without trailing zeros.
    pub amount: Decimal,
}

/// Calculates pay for `hours` and `minutes` of work starting at `start`.
///
/// Range validation of `hours` and `minutes` is the caller's job.
///
/// # Errors
///
/// Returns [`LedgerError::SalaryOverflow`] when an intermediate amount does
/// not fit in a [`Decimal`].
///
/// # Example
///
/// ```
/// use payroll_ledger::calculation::{calculate_work_pay, DayType};
/// use payroll_ledger::config::PayrollRules;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = PayrollRules::default();
/// let rate = Decimal::from_str("1.2").unwrap();
///
/// // 2021-01-02 is a Saturday
/// let start = NaiveDateTime::parse_from_str("2021-01-02 00:01:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let result = calculate_work_pay(rate, 1, 1, start, &rules).unwrap();
///
/// // 1.2 * 1 + 1.2 / 60 * 1 = 1.22, doubled on Saturday
/// assert_eq!(result.day_type, DayType::Saturday);
/// assert_eq!(result.base_amount, Decimal::from_str("1.22").unwrap());
/// assert_eq!(result.amount, Decimal::from_str("2.44").unwrap());
/// ```
pub fn calculate_work_pay(
    hourly_rate: Decimal,
    hours: i32,
    minutes: i32,
    start: NaiveDateTime,
    rules: &PayrollRules,
) -> LedgerResult<WorkPayResult> {
    let overflow = || LedgerError::SalaryOverflow {
        calculation: "work session pay",
    };

    let minute_rate = hourly_rate
        .checked_div(Decimal::from(MINUTES_PER_HOUR))
        .ok_or_else(overflow)?;
    let base_amount = hourly_rate
        .checked_mul(Decimal::from(hours))
        .zip(minute_rate.checked_mul(Decimal::from(minutes)))
        .and_then(|(hours_pay, minutes_pay)| hours_pay.checked_add(minutes_pay))
        .ok_or_else(overflow)?;

    let day_type = get_day_type(start);
    let multiplier = if day_type.is_weekend() {
        rules.weekend_multiplier
    } else {
        Decimal::ONE
    };
    let amount = base_amount.checked_mul(multiplier).ok_or_else(overflow)?;

    Ok(WorkPayResult {
        day_type,
        base_amount,
        multiplier,
        amount: amount.normalize(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_weekday_pay_is_not_multiplied() {
        // 2021-01-01 is a Friday
        let result = calculate_work_pay(
            dec("1.2"),
            1,
            1,
            make_datetime("2021-01-01", "00:01:00"),
            &PayrollRules::default(),
        )
        .unwrap();
        assert_eq!(result.day_type, DayType::Weekday);
        assert_eq!(result.multiplier, Decimal::ONE);
        assert_eq!(result.amount, dec("1.22"));
    }

    #[test]
    fn test_sunday_pay_is_doubled() {
        // 2021-01-03 is a Sunday: (1.2 * 2 + 0.02 * 2) * 2 = 4.88
        let result = calculate_work_pay(
            dec("1.2"),
            2,
            2,
            make_datetime("2021-01-03", "00:01:00"),
            &PayrollRules::default(),
        )
        .unwrap();
        assert_eq!(result.day_type, DayType::Sunday);
        assert_eq!(result.base_amount, dec("2.44"));
        assert_eq!(result.amount, dec("4.88"));
    }

    #[test]
    fn test_custom_weekend_multiplier() {
        let rules = PayrollRules {
            weekend_multiplier: dec("1.5"),
        };
        let result = calculate_work_pay(
            dec("10"),
            8,
            0,
            make_datetime("2021-01-02", "09:00:00"),
            &rules,
        )
        .unwrap();
        assert_eq!(result.amount, dec("120"));
    }

    #[test]
    fn test_zero_duration_pays_nothing() {
        let result = calculate_work_pay(
            dec("13.5"),
            0,
            0,
            make_datetime("2021-01-04", "09:00:00"),
            &PayrollRules::default(),
        )
        .unwrap();
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_minutes_only() {
        // 13.5 / 60 * 30 = 6.75
        let result = calculate_work_pay(
            dec("13.5"),
            0,
            30,
            make_datetime("2021-01-04", "09:00:00"),
            &PayrollRules::default(),
        )
        .unwrap();
        assert_eq!(result.amount, dec("6.75"));
    }

    #[test]
    fn test_rate_near_maximum_overflows() {
        let result = calculate_work_pay(
            Decimal::MAX - Decimal::TWO,
            2,
            0,
            make_datetime("2021-01-04", "09:00:00"),
            &PayrollRules::default(),
        );
        assert!(matches!(
            result,
            Err(LedgerError::SalaryOverflow {
                calculation: "work session pay"
            })
        ));
    }

    #[test]
    fn test_weekend_multiplier_can_overflow() {
        let rate = Decimal::MAX / Decimal::from(20);

        // 2021-01-04 is a Monday, 2021-01-02 a Saturday
        let weekday = calculate_work_pay(
            rate,
            15,
            0,
            make_datetime("2021-01-04", "08:00:00"),
            &PayrollRules::default(),
        );
        assert!(weekday.is_ok());

        let saturday = calculate_work_pay(
            rate,
            15,
            0,
            make_datetime("2021-01-02", "08:00:00"),
            &PayrollRules::default(),
        );
        assert!(matches!(saturday, Err(LedgerError::SalaryOverflow { .. })));
    }
}
