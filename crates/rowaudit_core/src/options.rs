//! Run options for an audit.

use crate::Severity;
use chrono::{Local, NaiveDate};

/// Settings for one audit run.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use rowaudit_core::{AuditOptions, Severity};
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
/// let options = AuditOptions::new()
///     .with_reference_date(as_of)
///     .with_severity_threshold(Severity::Error);
///
/// assert_eq!(options.reference_date, as_of);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOptions {
    /// Dates strictly after this day are reported as future dates
    pub reference_date: NaiveDate,

    /// Lowest severity that counts toward the exit status
    pub severity_threshold: Severity,
}

impl AuditOptions {
    /// Creates options with today's local date and a warning threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reference date for the future-date check.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    /// Sets the lowest severity counted toward the exit status.
    pub fn with_severity_threshold(mut self, threshold: Severity) -> Self {
        self.severity_threshold = threshold;
        self
    }
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            reference_date: Local::now().date_naive(),
            severity_threshold: Severity::Warning,
        }
    }
}
