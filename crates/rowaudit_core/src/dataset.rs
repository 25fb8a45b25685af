//! Dataset representation for auditing.
//!
//! Records are stored positionally under a shared header, the way they come
//! out of a delimited file. [`DataSet::row`] turns a record into the
//! column-keyed [`DataRow`] the row auditor works on.

use std::collections::HashMap;

/// A single record keyed by column name.
pub type DataRow = HashMap<String, String>;

/// A header plus the raw records read under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet {
    columns: Vec<String>,
    records: Vec<Vec<String>>,
}

impl DataSet {
    /// Creates a new dataset with no columns and no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new dataset with the given header and no records.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    /// Creates a dataset from a header and records.
    pub fn from_records(columns: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { columns, records }
    }

    /// Header column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the raw records.
    pub fn records(&self) -> impl Iterator<Item = &[String]> {
        self.records.iter().map(Vec::as_slice)
    }

    /// Appends a record.
    pub fn add_record(&mut self, record: Vec<String>) {
        self.records.push(record);
    }

    /// Builds the column-keyed view of the record at `index` (0-based).
    ///
    /// Columns missing from a short record are absent from the map. Values
    /// beyond the header width are dropped; callers that care about that
    /// check [`DataSet::records`] first.
    pub fn row(&self, index: usize) -> Option<DataRow> {
        let record = self.records.get(index)?;
        Some(
            self.columns
                .iter()
                .zip(record.iter())
                .map(|(column, value)| (column.clone(), value.clone()))
                .collect(),
        )
    }
}
