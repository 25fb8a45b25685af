//! Main audit engine.
//!
//! This module provides the [`DatasetAuditor`] that runs the row auditor over
//! every record of a dataset and aggregates the result.

use crate::{AuditError, FieldValidator, Result, RowAuditor};
use rowaudit_core::{AuditOptions, AuditOutcome, DataSet, Schema};
use std::time::Instant;
use tracing::{debug, info};

/// Index of the first data record. The header occupies position 1, so a
/// record's index is its line number in a file without embedded newlines.
pub const FIRST_RECORD_INDEX: usize = 2;

/// Audits whole datasets against a schema.
///
/// # Example
///
/// ```rust
/// use rowaudit_core::{AuditOptions, DataSet, Schema};
/// use rowaudit_validator::DatasetAuditor;
///
/// let auditor = DatasetAuditor::new(Schema::builtin(), &AuditOptions::new());
/// let outcome = auditor.audit(&DataSet::empty()).unwrap();
///
/// assert_eq!(outcome.summary().total_records(), 0);
/// assert_eq!(outcome.exit_status().code(), 0);
/// ```
#[derive(Debug)]
pub struct DatasetAuditor {
    schema: Schema,
    rows: RowAuditor,
}

impl DatasetAuditor {
    /// Creates an auditor with the built-in reference data.
    pub fn new(schema: Schema, options: &AuditOptions) -> Self {
        Self::with_field_validator(schema, FieldValidator::new(options.reference_date))
    }

    /// Creates an auditor around a preconfigured field validator.
    pub fn with_field_validator(schema: Schema, fields: FieldValidator) -> Self {
        Self {
            schema,
            rows: RowAuditor::new(fields),
        }
    }

    /// Audits every record in order.
    ///
    /// Records are numbered from [`FIRST_RECORD_INDEX`] in data order.
    /// Issues are concatenated in record order, then column order, and the
    /// summary is computed once from the complete list.
    ///
    /// # Errors
    ///
    /// Fails without a partial result if the header shares no column with
    /// the schema, or a record is wider than the header.
    pub fn audit(&self, dataset: &DataSet) -> Result<AuditOutcome> {
        let start = Instant::now();
        info!(
            records = dataset.len(),
            columns = dataset.columns().len(),
            reference_date = %self.rows.reference_date(),
            "Auditing dataset"
        );

        self.check_header(dataset)?;

        let mut issues = Vec::new();
        let width = dataset.columns().len();

        for (position, record) in dataset.records().enumerate() {
            let record_index = position + FIRST_RECORD_INDEX;

            if record.len() > width {
                return Err(AuditError::RowTooWide {
                    record_index,
                    values: record.len(),
                    columns: width,
                });
            }

            let row = dataset.row(position).unwrap_or_default();
            let found = self.rows.audit_row(&self.schema, record_index, &row);
            if !found.is_empty() {
                debug!(record_index, issues = found.len(), "Record has issues");
            }
            issues.extend(found);
        }

        let outcome = AuditOutcome::new(dataset.len(), issues);
        info!(
            issues = outcome.summary().total_issues(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Audit complete"
        );

        Ok(outcome)
    }

    fn check_header(&self, dataset: &DataSet) -> Result<()> {
        let columns = dataset.columns();
        if columns.is_empty() || columns.iter().any(|c| self.schema.contains(c)) {
            return Ok(());
        }

        Err(AuditError::unmappable_header(
            columns.iter().map(String::as_str),
            self.schema.column_names(),
        ))
    }
}
