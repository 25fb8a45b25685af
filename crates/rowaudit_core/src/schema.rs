//! Audit schema: which validators run on which columns.
//!
//! A [`Schema`] is an ordered list of [`ColumnRule`]s. Rule order decides the
//! order issues are reported in within a row. The fixed schema used by the
//! command-line tool is declared as the static [`BUILTIN_SCHEMA`] table.

use crate::FieldType;

/// The fixed column-to-validator table used by the `rowaudit` binary.
pub const BUILTIN_SCHEMA: &[(&str, &[FieldType])] = &[
    ("id", &[FieldType::FreeText]),
    ("name", &[FieldType::Required]),
    ("email", &[FieldType::Required, FieldType::Email]),
    ("age", &[FieldType::Required, FieldType::Age]),
    ("country", &[FieldType::Required, FieldType::CountryCode]),
    ("signup_date", &[FieldType::Required, FieldType::Date]),
];

/// Normalises a column name for matching: trimmed and lower-cased.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Field types declared for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRule {
    name: String,
    field_types: Vec<FieldType>,
}

impl ColumnRule {
    pub(crate) fn new(name: impl Into<String>, field_types: Vec<FieldType>) -> Self {
        Self {
            name: name.into(),
            field_types,
        }
    }

    /// Column name, normalised.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field types in declaration order.
    pub fn field_types(&self) -> &[FieldType] {
        &self.field_types
    }
}

/// Ordered mapping from column name to field types.
///
/// Use [`SchemaBuilder`](crate::SchemaBuilder) to declare one, or
/// [`Schema::builtin`] for the fixed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<ColumnRule>,
}

impl Schema {
    pub(crate) fn from_rules(columns: Vec<ColumnRule>) -> Self {
        Self { columns }
    }

    /// Returns the fixed schema described by [`BUILTIN_SCHEMA`].
    pub fn builtin() -> Self {
        Self::from_rules(
            BUILTIN_SCHEMA
                .iter()
                .map(|(name, types)| ColumnRule::new(*name, types.to_vec()))
                .collect(),
        )
    }

    /// Column rules in declaration order.
    pub fn columns(&self) -> &[ColumnRule] {
        &self.columns
    }

    /// Looks up the rule for a column.
    pub fn column(&self, name: &str) -> Option<&ColumnRule> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns true if the schema declares the column.
    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no column is declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::builtin()
    }
}
