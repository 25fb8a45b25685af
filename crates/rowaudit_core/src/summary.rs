//! Aggregation over an audit run and the exit-code policy derived from it.
//!
//! A [`Summary`] is always recomputed in full from an issue list; it has no
//! incremental update API, so it can never drift out of sync with the issues
//! it describes.

use crate::{Issue, Severity};
use serde::{Deserialize, Serialize};

/// Process exit code for runs that fail before an audit result exists.
pub const FATAL_EXIT_CODE: u8 = 20;

/// Number of issues per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Info-level issues
    pub info: usize,
    /// Warning-level issues
    pub warning: usize,
    /// Error-level issues
    pub error: usize,
}

impl SeverityCounts {
    /// Counts issues per severity.
    pub fn from_issues(issues: &[Issue]) -> Self {
        issues.iter().fold(Self::default(), |mut counts, issue| {
            *counts.slot(issue.severity) += 1;
            counts
        })
    }

    fn slot(&mut self, severity: Severity) -> &mut usize {
        match severity {
            Severity::Info => &mut self.info,
            Severity::Warning => &mut self.warning,
            Severity::Error => &mut self.error,
        }
    }

    /// Returns the count for one severity.
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }

    /// Sum over all severities.
    pub fn total(&self) -> usize {
        self.info + self.warning + self.error
    }

    /// Iterates `(severity, count)` pairs in ascending severity order.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        Severity::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Aggregate statistics over all issues of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    total_records: usize,
    total_issues: usize,
    counts_by_severity: SeverityCounts,
}

impl Summary {
    /// Computes the summary of a complete run.
    pub fn from_issues(total_records: usize, issues: &[Issue]) -> Self {
        Self {
            total_records,
            total_issues: issues.len(),
            counts_by_severity: SeverityCounts::from_issues(issues),
        }
    }

    /// Number of records audited, with or without issues.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Number of issues found.
    pub fn total_issues(&self) -> usize {
        self.total_issues
    }

    /// Issue counts per severity.
    pub fn counts_by_severity(&self) -> &SeverityCounts {
        &self.counts_by_severity
    }

    /// Highest severity present, if any issue was found.
    pub fn highest_severity(&self) -> Option<Severity> {
        Severity::ALL
            .into_iter()
            .rev()
            .find(|s| self.counts_by_severity.get(*s) > 0)
    }

    /// Returns true if no issue was found.
    pub fn is_clean(&self) -> bool {
        self.total_issues == 0
    }
}

/// Issues of a completed run together with their summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOutcome {
    issues: Vec<Issue>,
    summary: Summary,
}

impl AuditOutcome {
    /// Wraps a full issue list, computing its summary.
    pub fn new(total_records: usize, issues: Vec<Issue>) -> Self {
        let summary = Summary::from_issues(total_records, &issues);
        Self { issues, summary }
    }

    /// Issues in (record, column) order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Summary of the run.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Exit status under the default policy.
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_summary(&self.summary)
    }

    /// Splits the outcome into its issues and summary.
    pub fn into_parts(self) -> (Vec<Issue>, Summary) {
        (self.issues, self.summary)
    }
}

/// Automation-facing result of a completed audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExitStatus {
    /// No counted issues
    Clean,
    /// Warnings present, no errors
    Warnings,
    /// At least one error
    Errors,
}

impl ExitStatus {
    /// Derives the exit status from the severity counts.
    ///
    /// Errors win over warnings; info-level issues never change the status.
    pub fn from_summary(summary: &Summary) -> Self {
        Self::from_summary_with_threshold(summary, Severity::Info)
    }

    /// Derives the exit status, ignoring severities below `threshold`.
    pub fn from_summary_with_threshold(summary: &Summary, threshold: Severity) -> Self {
        let counts = summary.counts_by_severity();
        let counted = |severity: Severity| severity >= threshold && counts.get(severity) > 0;

        if counted(Severity::Error) {
            ExitStatus::Errors
        } else if counted(Severity::Warning) {
            ExitStatus::Warnings
        } else {
            ExitStatus::Clean
        }
    }

    /// Numeric process exit code.
    pub fn code(&self) -> u8 {
        match self {
            ExitStatus::Clean => 0,
            ExitStatus::Warnings => 1,
            ExitStatus::Errors => 2,
        }
    }
}
