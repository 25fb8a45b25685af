//! Audit data model.
//!
//! This module contains the types that flow through an audit run: the
//! semantic [`FieldType`] of a column, the [`Severity`] scale, the
//! [`Finding`] a validator returns, and the [`Issue`] it becomes once it is
//! tied to a record and a column.

use crate::ParseSeverityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic type of a column, selecting which validator runs on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Value must look like `local@domain.tld`
    Email,
    /// Value must be a parseable, non-future calendar date
    Date,
    /// Value must resolve to an ISO 3166-1 country
    CountryCode,
    /// Value must be present and not blank
    Required,
    /// Value must be a whole number of years in a plausible range
    Age,
    /// No validation
    FreeText,
}

impl FieldType {
    /// Returns the snake_case name of this field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Email => "email",
            FieldType::Date => "date",
            FieldType::CountryCode => "country_code",
            FieldType::Required => "required",
            FieldType::Age => "age",
            FieldType::FreeText => "free_text",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seriousness of an issue.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but plausibly correct
    Info,
    /// Likely wrong, should be reviewed
    Warning,
    /// Definitely wrong or missing
    Error,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];

    /// Returns the lowercase name of this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Outcome of a single failed check, before it is tied to a row and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Severity assigned by the validator
    pub severity: Severity,
    /// Human-readable description of the problem
    pub message: String,
}

impl Finding {
    /// Creates a new finding.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Creates an error-level finding.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning-level finding.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an info-level finding.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

/// A single data quality problem tied to one record and one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// 1-based position of the record, counting the header as position 1
    pub record_index: usize,

    /// Column the value was read from
    pub column: String,

    /// Raw value as read, possibly empty
    pub value: String,

    /// Severity of the problem
    pub severity: Severity,

    /// Description of the problem
    pub message: String,
}

impl Issue {
    /// Stamps a finding with its record index, column and raw value.
    pub fn new(
        record_index: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        finding: Finding,
    ) -> Self {
        Self {
            record_index,
            column: column.into(),
            value: value.into(),
            severity: finding.severity,
            message: finding.message,
        }
    }
}
