//! Error types for report output.

use arrow_schema::ArrowError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while writing or reading reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// File I/O error
    #[error("Failed to access report '{path}': {source}")]
    Io {
        /// Report path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Writing to a caller-supplied stream failed
    #[error("Failed to write report: {0}")]
    Stream(#[source] std::io::Error),

    /// JSON serialization or parsing failed
    #[error("JSON report error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV encoding failed
    #[error("CSV report error: {0}")]
    Csv(#[from] ArrowError),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
