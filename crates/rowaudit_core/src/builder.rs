//! Builder for declaring audit schemas.

use crate::{ColumnRule, FieldType, Result, Schema, SchemaError, normalize_column_name};
use std::collections::HashSet;

/// Builder for creating a [`Schema`].
///
/// Column names are normalised (trimmed, lower-cased) so they match the
/// headers produced by the reader.
///
/// # Example
///
/// ```rust
/// use rowaudit_core::{FieldType, SchemaBuilder};
///
/// let schema = SchemaBuilder::new()
///     .column("name", FieldType::Required)
///     .column_with("email", [FieldType::Required, FieldType::Email])
///     .column("joined", FieldType::Date)
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    columns: Vec<(String, Vec<FieldType>)>,
}

impl SchemaBuilder {
    /// Creates an empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a column validated by a single field type.
    pub fn column(self, name: impl AsRef<str>, field_type: FieldType) -> Self {
        self.column_with(name, [field_type])
    }

    /// Declares a column validated by several field types, run in order.
    pub fn column_with(
        mut self,
        name: impl AsRef<str>,
        field_types: impl IntoIterator<Item = FieldType>,
    ) -> Self {
        self.columns.push((
            normalize_column_name(name.as_ref()),
            field_types.into_iter().collect(),
        ));
        self
    }

    /// Builds the schema.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if no column was declared, a name is blank,
    /// a column is declared twice, or a column has no (or repeated) field
    /// types.
    pub fn build(self) -> Result<Schema> {
        if self.columns.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(self.columns.len());

        for (name, field_types) in self.columns {
            if name.is_empty() {
                return Err(SchemaError::BlankColumnName);
            }
            if !seen.insert(name.clone()) {
                return Err(SchemaError::duplicate_column(name));
            }
            if field_types.is_empty() {
                return Err(SchemaError::no_field_types(name));
            }

            let mut seen_types = HashSet::new();
            for field_type in &field_types {
                if !seen_types.insert(*field_type) {
                    return Err(SchemaError::DuplicateFieldType {
                        column: name,
                        field_type: *field_type,
                    });
                }
            }

            rules.push(ColumnRule::new(name, field_types));
        }

        Ok(Schema::from_rules(rules))
    }
}
