//! Error types for the audit data model.
//!
//! Validation issues are data, not errors: they are represented by
//! [`Issue`](crate::Issue). The types here only cover invalid schema
//! declarations and unparsable configuration values.

use crate::FieldType;
use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while declaring a [`Schema`](crate::Schema).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema declares no columns
    #[error("Schema declares no columns")]
    Empty,

    /// A column name is empty or whitespace-only
    #[error("Schema contains a blank column name")]
    BlankColumnName,

    /// The same column is declared more than once
    #[error("Column '{0}' is declared more than once")]
    DuplicateColumn(String),

    /// A column has no field types attached
    #[error("Column '{0}' has no field types")]
    NoFieldTypes(String),

    /// The same field type is attached twice to one column
    #[error("Field type '{field_type}' is attached twice to column '{column}'")]
    DuplicateFieldType {
        /// Column name
        column: String,
        /// Repeated field type
        field_type: FieldType,
    },
}

impl SchemaError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Self::DuplicateColumn(column.into())
    }

    /// Creates a new missing field types error.
    pub fn no_field_types(column: impl Into<String>) -> Self {
        Self::NoFieldTypes(column.into())
    }
}

/// Error returned when a severity name cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown severity '{0}': expected one of info, warning, error")]
pub struct ParseSeverityError(pub String);
