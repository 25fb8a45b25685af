//! Row auditing.

use crate::FieldValidator;
use chrono::NaiveDate;
use rowaudit_core::{DataRow, Issue, Schema};

/// Applies the schema's validators to one row.
#[derive(Debug)]
pub struct RowAuditor {
    fields: FieldValidator,
}

impl RowAuditor {
    /// Creates a row auditor backed by the given field validator.
    pub fn new(fields: FieldValidator) -> Self {
        Self { fields }
    }

    /// Day after which dates are reported as future dates.
    pub fn reference_date(&self) -> NaiveDate {
        self.fields.reference_date()
    }

    /// Audits one row.
    ///
    /// Issues come out in schema column order, then field type declaration
    /// order. Columns absent from the row are audited as empty strings;
    /// columns the schema does not declare are ignored.
    pub fn audit_row(&self, schema: &Schema, record_index: usize, row: &DataRow) -> Vec<Issue> {
        let mut issues = Vec::new();

        for rule in schema.columns() {
            let value = row.get(rule.name()).map(String::as_str).unwrap_or_default();

            for field_type in rule.field_types() {
                if let Some(finding) = self.fields.validate(*field_type, value) {
                    issues.push(Issue::new(record_index, rule.name(), value, finding));
                }
            }
        }

        issues
    }
}
