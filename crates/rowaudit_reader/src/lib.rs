//! Loader for delimited text datasets.
//!
//! Reads a header row plus data rows into a [`DataSet`]. Parsing goes through
//! `arrow-csv` with every column typed as UTF-8, so values reach the
//! validators exactly as written. Empty and missing fields become empty
//! strings.
//!
//! Header names are normalised (trimmed, lower-cased) before they are
//! matched against the audit schema.
//!
//! # Example
//!
//! ```rust
//! use rowaudit_reader::{ReaderOptions, read_str};
//!
//! let csv = "Name , Email\nAna,a@b.com\nBo,\n";
//! let dataset = read_str(csv, &ReaderOptions::default()).unwrap();
//!
//! assert_eq!(dataset.columns(), &["name", "email"]);
//! assert_eq!(dataset.len(), 2);
//! ```

use arrow_array::{Array, RecordBatch, StringArray};
use arrow_csv::{ReaderBuilder, reader::Format};
use arrow_schema::{ArrowError, DataType, Field, Schema};
use rowaudit_core::{DataSet, normalize_column_name};
use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that make an input file unreadable as a table.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// File I/O error
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The input has no header row
    #[error("Input is empty: expected a header row")]
    MissingHeader,

    /// A header cell is blank
    #[error("Header column {position} is blank")]
    BlankColumn {
        /// 1-based header position
        position: usize,
    },

    /// Two header cells normalise to the same name
    #[error("Header column '{0}' appears more than once")]
    DuplicateColumn(String),

    /// The delimiter is not a single ASCII character
    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    /// Rows cannot be parsed (too many fields, bad quoting, invalid UTF-8)
    #[error("Malformed input: {0}")]
    Malformed(#[from] ArrowError),
}

/// Result type alias for reader operations.
pub type Result<T> = std::result::Result<T, ReaderError>;

/// Options for reading delimited text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Field delimiter byte
    pub delimiter: u8,

    /// Rows decoded per Arrow batch
    pub batch_size: usize,
}

impl ReaderOptions {
    /// Creates options with a comma delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::InvalidDelimiter`] for non-ASCII characters.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(ReaderError::InvalidDelimiter(delimiter));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            batch_size: 1024,
        }
    }
}

/// Reads a delimited file from disk.
///
/// # Errors
///
/// Returns a [`ReaderError`] if the file cannot be read or is not a
/// well-formed table.
pub fn read_path(path: impl AsRef<Path>, options: &ReaderOptions) -> Result<DataSet> {
    let path = path.as_ref();
    info!("Reading dataset: {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| ReaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_bytes(&bytes, options)
}

/// Reads a delimited table from a string.
pub fn read_str(content: &str, options: &ReaderOptions) -> Result<DataSet> {
    read_bytes(content.as_bytes(), options)
}

/// Reads a delimited table from raw bytes.
pub fn read_bytes(bytes: &[u8], options: &ReaderOptions) -> Result<DataSet> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ReaderError::MissingHeader);
    }

    let format = Format::default()
        .with_header(true)
        .with_delimiter(options.delimiter);
    let (header, _) = format.infer_schema(Cursor::new(bytes), Some(0))?;

    let columns = normalize_header(&header)?;
    debug!(columns = ?columns, "Parsed header");

    let schema = Arc::new(Schema::new(
        header
            .fields()
            .iter()
            .map(|f| Field::new(f.name(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ));

    let reader = ReaderBuilder::new(schema)
        .with_header(true)
        .with_delimiter(options.delimiter)
        .with_batch_size(options.batch_size)
        .with_truncated_rows(true)
        .build(Cursor::new(bytes))?;

    let mut dataset = DataSet::new(columns);
    for batch in reader {
        append_batch(&mut dataset, &batch?)?;
    }

    info!(records = dataset.len(), "Loaded records");
    Ok(dataset)
}

fn normalize_header(header: &Schema) -> Result<Vec<String>> {
    if header.fields().is_empty() {
        return Err(ReaderError::MissingHeader);
    }

    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(header.fields().len());

    for (position, field) in header.fields().iter().enumerate() {
        let name = normalize_column_name(field.name());
        if name.is_empty() {
            return Err(ReaderError::BlankColumn {
                position: position + 1,
            });
        }
        if !seen.insert(name.clone()) {
            return Err(ReaderError::DuplicateColumn(name));
        }
        columns.push(name);
    }

    Ok(columns)
}

fn append_batch(dataset: &mut DataSet, batch: &RecordBatch) -> Result<()> {
    let arrays = batch
        .columns()
        .iter()
        .map(|column| {
            column
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| {
                    ArrowError::CastError(format!(
                        "Expected a UTF-8 column, found {}",
                        column.data_type()
                    ))
                })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for row in 0..batch.num_rows() {
        let record = arrays
            .iter()
            .map(|array| {
                if array.is_null(row) {
                    String::new()
                } else {
                    array.value(row).to_string()
                }
            })
            .collect();
        dataset.add_record(record);
    }

    Ok(())
}
