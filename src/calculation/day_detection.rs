//! Day detection and day-boundary checks.
//!
//! This module provides utilities for determining the day type (weekday,
//! Saturday, Sunday) for any datetime and for checking whether a reported
//! span of work stays within the day of the year it started on.

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for weekend pay.
///
/// # Example
///
/// ```
/// use payroll_ledger::calculation::DayType;
///
/// assert!(DayType::Saturday.is_weekend());
/// assert!(!DayType::Weekday.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given datetime.
///
/// # Example
///
/// ```
/// use payroll_ledger::calculation::{get_day_type, DayType};
/// use chrono::NaiveDateTime;
///
/// // 2021-01-02 is a Saturday
/// let saturday = NaiveDateTime::parse_from_str("2021-01-02 00:01:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2021-01-01 is a Friday
/// let friday = NaiveDateTime::parse_from_str("2021-01-01 00:01:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(friday), DayType::Weekday);
/// ```
pub fn get_day_type(datetime: NaiveDateTime) -> DayType {
    match datetime.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns the moment a span of work starting at `start` ends.
///
/// Minutes are added before hours. Returns `None` if the result falls
/// outside the representable datetime range.
pub fn work_end(start: NaiveDateTime, hours: i32, minutes: i32) -> Option<NaiveDateTime> {
    start
        .checked_add_signed(Duration::minutes(i64::from(minutes)))?
        .checked_add_signed(Duration::hours(i64::from(hours)))
}

/// Checks whether a span of work ends on a later day of the year.
///
/// Days are compared by their ordinal within the year, so a span running
/// from December 31 into January 1 does not count as crossing. A span
/// ending exactly at midnight belongs to the next day and therefore counts
/// as crossing. A span whose end cannot be represented also counts as
/// crossing.
///
/// # Example
///
/// ```
/// use payroll_ledger::calculation::ends_on_later_day;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2021-01-01 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(!ends_on_later_day(start, 0, 59));
/// assert!(ends_on_later_day(start, 1, 0));
///
/// let new_years_eve = NaiveDateTime::parse_from_str("2021-12-31 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(!ends_on_later_day(new_years_eve, 2, 0));
/// ```
pub fn ends_on_later_day(start: NaiveDateTime, hours: i32, minutes: i32) -> bool {
    match work_end(start, hours, minutes) {
        Some(end) => end.ordinal() > start.ordinal(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_weekdays_are_weekday() {
        // 2021-01-04 is a Monday
        for day in 4..=8 {
            let datetime = make_datetime(&format!("2021-01-{:02}", day), "12:00:00");
            assert_eq!(get_day_type(datetime), DayType::Weekday);
        }
    }

    #[test]
    fn test_saturday_and_sunday() {
        assert_eq!(
            get_day_type(make_datetime("2021-01-02", "00:01:00")),
            DayType::Saturday
        );
        assert_eq!(
            get_day_type(make_datetime("2021-01-03", "23:59:59")),
            DayType::Sunday
        );
    }

    #[test]
    fn test_is_weekend() {
        assert!(DayType::Saturday.is_weekend());
        assert!(DayType::Sunday.is_weekend());
        assert!(!DayType::Weekday.is_weekend());
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(DayType::Sunday.to_string(), "Sunday");
    }

    #[test]
    fn test_work_end_adds_hours_and_minutes() {
        let start = make_datetime("2021-01-01", "13:00:00");
        assert_eq!(
            work_end(start, 1, 30),
            Some(make_datetime("2021-01-01", "14:30:00"))
        );
    }

    #[test]
    fn test_work_end_overflow_is_none() {
        assert_eq!(work_end(NaiveDateTime::MAX, 1, 0), None);
    }

    #[test]
    fn test_span_within_day_does_not_cross() {
        let start = make_datetime("2021-01-01", "00:01:00");
        assert!(!ends_on_later_day(start, 23, 58));
        assert!(!ends_on_later_day(start, 0, 0));
    }

    #[test]
    fn test_span_ending_at_midnight_crosses() {
        let start = make_datetime("2021-01-01", "00:01:00");
        assert!(ends_on_later_day(start, 23, 59));
    }

    #[test]
    fn test_one_second_before_midnight() {
        let start = make_datetime("2021-01-01", "23:59:59");
        assert!(ends_on_later_day(start, 0, 1));
        assert!(ends_on_later_day(start, 1, 0));
        assert!(ends_on_later_day(start, 1, 1));
    }

    #[test]
    fn test_year_end_wraparound_does_not_cross() {
        // January 1 is day 1, which is not later than day 365
        let start = make_datetime("2021-12-31", "23:00:00");
        assert!(!ends_on_later_day(start, 2, 0));
        assert!(!ends_on_later_day(start, 1, 0));
    }

    #[test]
    fn test_leap_year_end_wraparound_does_not_cross() {
        let start = make_datetime("2020-12-31", "22:30:00");
        assert_eq!(start.ordinal(), 366);
        assert!(!ends_on_later_day(start, 3, 0));
    }

    #[test]
    fn test_day_before_new_years_eve_crosses() {
        let start = make_datetime("2021-12-30", "23:00:00");
        assert!(ends_on_later_day(start, 2, 0));
    }

    #[test]
    fn test_negative_span_does_not_cross_forward() {
        let start = make_datetime("2021-01-01", "12:00:00");
        assert!(!ends_on_later_day(start, -1, -1));
    }
}
