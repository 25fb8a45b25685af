//! JSON report: the summary followed by the full issue list.

use crate::{ReportError, Result};
use rowaudit_core::{AuditOutcome, Issue, Summary};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Machine-readable form of an audit result.
///
/// Parsing rejects a report whose summary does not match its issue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedReport")]
pub struct AuditReport {
    /// Aggregate statistics
    pub summary: Summary,
    /// Every issue, in record then column order
    pub issues: Vec<Issue>,
}

impl AuditReport {
    /// Copies an outcome into report form.
    pub fn from_outcome(outcome: &AuditOutcome) -> Self {
        Self {
            summary: outcome.summary().clone(),
            issues: outcome.issues().to_vec(),
        }
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a report from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Deserialize)]
struct UncheckedReport {
    summary: Summary,
    issues: Vec<Issue>,
}

impl TryFrom<UncheckedReport> for AuditReport {
    type Error = String;

    fn try_from(report: UncheckedReport) -> std::result::Result<Self, Self::Error> {
        let expected = Summary::from_issues(report.summary.total_records(), &report.issues);
        if report.summary != expected {
            return Err(format!(
                "summary counts {:?} do not match the {} listed issues",
                report.summary.counts_by_severity(),
                report.issues.len()
            ));
        }

        Ok(Self {
            summary: report.summary,
            issues: report.issues,
        })
    }
}

impl From<AuditOutcome> for AuditReport {
    fn from(outcome: AuditOutcome) -> Self {
        let (issues, summary) = outcome.into_parts();
        Self { summary, issues }
    }
}

/// Writes the JSON report for an outcome to `path`.
pub fn write_json_report(path: impl AsRef<Path>, outcome: &AuditOutcome) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &AuditReport::from_outcome(outcome))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| ReportError::io(path, e))?;

    info!(
        issues = outcome.issues().len(),
        "Wrote JSON report: {}",
        path.display()
    );
    Ok(())
}

/// Reads a JSON report back from `path`.
pub fn read_json_report(path: impl AsRef<Path>) -> Result<AuditReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
