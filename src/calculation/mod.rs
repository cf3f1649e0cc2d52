//! Calculation logic for the payroll ledger.
//!
//! This module contains day detection for weekend pay, the end-of-day
//! boundary check for reported work, and per-session pay calculation.

mod day_detection;
mod work_pay;

pub use day_detection::{DayType, ends_on_later_day, get_day_type, work_end};
pub use work_pay::{MINUTES_PER_HOUR, WorkPayResult, calculate_work_pay};
