//! Error types for audit runs.

use thiserror::Error;

/// Result type for audit runs.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Conditions that make a whole dataset unauditable.
///
/// Per-value problems are never errors; they become
/// [`Issue`](rowaudit_core::Issue)s.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// The header shares no column with the schema
    #[error("Input columns [{found}] do not match any audited column [{expected}]")]
    UnmappableHeader {
        /// Header columns found in the input
        found: String,
        /// Columns the schema audits
        expected: String,
    },

    /// A record has more values than the header has columns
    #[error("Record {record_index} has {values} values but the header declares {columns} columns")]
    RowTooWide {
        /// 1-based record index
        record_index: usize,
        /// Number of values in the record
        values: usize,
        /// Number of header columns
        columns: usize,
    },
}

impl AuditError {
    /// Creates a new unmappable header error.
    pub fn unmappable_header<'a>(
        found: impl IntoIterator<Item = &'a str>,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnmappableHeader {
            found: found.into_iter().collect::<Vec<_>>().join(", "),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}
