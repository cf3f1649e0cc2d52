//! Rendering of monthly salary reports.
//!
//! Aggregation lives in [`Company::get_monthly_report`](crate::company::Company::get_monthly_report)
//! and has no side effects; callers that want a printable report pass the
//! rows to a [`ReportFormatter`].

use tracing::debug;

use crate::config::{DEFAULT_REPORT_TITLE, ReportSettings};
use crate::error::LedgerResult;
use crate::models::MonthlyReportData;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// A title line, a blank line, then one line per row.
    #[default]
    Text,
    /// A pretty-printed JSON array of rows.
    Json,
}

/// Renders monthly report rows for display.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::MonthlyReportData;
/// use payroll_ledger::report::{ReportFormat, ReportFormatter};
/// use rust_decimal::Decimal;
///
/// let rows = vec![MonthlyReportData {
///     employee_id: 1,
///     year: 2021,
///     month: 1,
///     salary: Decimal::new(122, 2),
/// }];
///
/// let text = ReportFormatter::new(ReportFormat::Text).render(&rows).unwrap();
/// assert_eq!(
///     text,
///     "Full salary report for each company employee per month.\n\n\
///      EmployeeId: 1 Year: 2021 Month: 1 Salary: 1.22\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    format: ReportFormat,
    title: String,
}

impl ReportFormatter {
    /// Creates a formatter with the default title.
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }

    /// Creates a formatter using configured report settings.
    pub fn from_settings(format: ReportFormat, settings: &ReportSettings) -> Self {
        Self::new(format).with_title(settings.title.clone())
    }

    /// Replaces the title printed above text reports.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the output format.
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Renders `rows` in this formatter's format.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Serialization`](crate::error::LedgerError::Serialization)
    /// if JSON output cannot be produced.
    pub fn render(&self, rows: &[MonthlyReportData]) -> LedgerResult<String> {
        debug!(format = ?self.format, rows = rows.len(), "Rendering monthly report");

        match self.format {
            ReportFormat::Text => Ok(self.render_text(rows)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        }
    }

    fn render_text(&self, rows: &[MonthlyReportData]) -> String {
        let mut out = format!("{}\n\n", self.title);
        for row in rows {
            out.push_str(&row.to_string());
            out.push('\n');
        }
        out
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(ReportFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rows() -> Vec<MonthlyReportData> {
        vec![
            MonthlyReportData {
                employee_id: 1,
                year: 2021,
                month: 1,
                salary: dec("1.22"),
            },
            MonthlyReportData {
                employee_id: 2,
                year: 2021,
                month: 1,
                salary: dec("10.27"),
            },
        ]
    }

    #[test]
    fn test_text_report_lists_rows_under_title() {
        let text = ReportFormatter::default().render(&rows()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                DEFAULT_REPORT_TITLE,
                "",
                "EmployeeId: 1 Year: 2021 Month: 1 Salary: 1.22",
                "EmployeeId: 2 Year: 2021 Month: 1 Salary: 10.27",
            ]
        );
    }

    #[test]
    fn test_text_report_for_no_rows_has_only_title() {
        let text = ReportFormatter::default().render(&[]).unwrap();
        assert_eq!(text, format!("{DEFAULT_REPORT_TITLE}\n\n"));
    }

    #[test]
    fn test_text_report_is_exact() {
        let text = ReportFormatter::default().render(&rows()[..1]).unwrap();
        assert_eq!(
            text,
            format!("{DEFAULT_REPORT_TITLE}\n\nEmployeeId: 1 Year: 2021 Month: 1 Salary: 1.22\n")
        );
    }

    #[test]
    fn test_custom_title() {
        let settings = ReportSettings {
            title: "Monthly pay".to_string(),
        };
        let formatter = ReportFormatter::from_settings(ReportFormat::Text, &settings);
        let text = formatter.render(&[]).unwrap();
        assert!(text.starts_with("Monthly pay\n"));
    }

    #[test]
    fn test_json_report_parses_back_to_rows() {
        let formatter = ReportFormatter::new(ReportFormat::Json);
        assert_eq!(formatter.format(), ReportFormat::Json);

        let json = formatter.render(&rows()).unwrap();
        let parsed: Vec<MonthlyReportData> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rows());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["salary"], "10.27");
    }
}
