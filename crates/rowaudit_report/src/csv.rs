//! CSV report: one row per issue.

use crate::{ReportError, Result};
use arrow_array::{ArrayRef, RecordBatch, StringArray, UInt64Array};
use arrow_csv::WriterBuilder;
use arrow_schema::{DataType, Field, Schema};
use rowaudit_core::Issue;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Column order of the CSV report.
pub const CSV_REPORT_COLUMNS: [&str; 5] = ["record_index", "column", "value", "severity", "message"];

fn report_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(CSV_REPORT_COLUMNS[0], DataType::UInt64, false),
        Field::new(CSV_REPORT_COLUMNS[1], DataType::Utf8, false),
        Field::new(CSV_REPORT_COLUMNS[2], DataType::Utf8, false),
        Field::new(CSV_REPORT_COLUMNS[3], DataType::Utf8, false),
        Field::new(CSV_REPORT_COLUMNS[4], DataType::Utf8, false),
    ]))
}

/// Converts issues into a single Arrow batch in report column order.
pub fn issues_to_batch(issues: &[Issue]) -> Result<RecordBatch> {
    let columns: Vec<ArrayRef> = vec![
        Arc::new(UInt64Array::from_iter_values(
            issues.iter().map(|i| i.record_index as u64),
        )),
        Arc::new(StringArray::from_iter_values(
            issues.iter().map(|i| i.column.as_str()),
        )),
        Arc::new(StringArray::from_iter_values(
            issues.iter().map(|i| i.value.as_str()),
        )),
        Arc::new(StringArray::from_iter_values(
            issues.iter().map(|i| i.severity.as_str()),
        )),
        Arc::new(StringArray::from_iter_values(
            issues.iter().map(|i| i.message.as_str()),
        )),
    ];

    Ok(RecordBatch::try_new(report_schema(), columns)?)
}

/// Renders the CSV report in memory. The header is always written.
pub fn render_csv(issues: &[Issue]) -> Result<Vec<u8>> {
    let batch = issues_to_batch(issues)?;
    let mut buf = Vec::new();

    // The encoder flushes on drop and discards the error, so it only ever
    // writes into memory.
    {
        let mut csv = WriterBuilder::new().with_header(true).build(&mut buf);
        csv.write(&batch)?;
    }

    Ok(buf)
}

/// Writes the CSV report to any writer.
pub fn write_csv<W: Write>(mut writer: W, issues: &[Issue]) -> Result<()> {
    let buf = render_csv(issues)?;
    writer
        .write_all(&buf)
        .and_then(|_| writer.flush())
        .map_err(ReportError::Stream)
}

/// Writes the CSV report to `path`.
pub fn write_csv_report(path: impl AsRef<Path>, issues: &[Issue]) -> Result<()> {
    let path = path.as_ref();
    let buf = render_csv(issues)?;
    std::fs::write(path, buf).map_err(|e| ReportError::io(path, e))?;

    info!(issues = issues.len(), "Wrote CSV report: {}", path.display());
    Ok(())
}
