use anyhow::{Context, Result};
use rowaudit_core::{AuditOptions, ExitStatus, Schema};
use rowaudit_reader::{ReaderOptions, read_path};
use rowaudit_report::{write_csv_report, write_json_report};
use rowaudit_validator::DatasetAuditor;
use std::path::PathBuf;
use tracing::info;

use crate::output;

/// Everything one `rowaudit` invocation needs.
pub struct AuditCommand {
    pub input: PathBuf,
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub quiet: bool,
    pub delimiter: char,
    pub limit: usize,
    pub options: AuditOptions,
}

/// Reads, audits and reports on the input file.
///
/// Reports are written only after the audit completes, so a fatal error
/// never leaves partial report files behind.
pub fn execute(command: &AuditCommand) -> Result<ExitStatus> {
    info!("Auditing input: {}", command.input.display());
    info!("Reference date: {}", command.options.reference_date);
    info!("Severity threshold: {}", command.options.severity_threshold);

    let reader_options = ReaderOptions::new().with_delimiter(command.delimiter)?;
    let dataset = read_path(&command.input, &reader_options)
        .with_context(|| format!("Failed to read input file: {}", command.input.display()))?;

    let auditor = DatasetAuditor::new(Schema::builtin(), &command.options);
    let outcome = auditor
        .audit(&dataset)
        .with_context(|| format!("Failed to audit {}", command.input.display()))?;

    if let Some(path) = &command.csv {
        write_csv_report(path, outcome.issues())
            .with_context(|| format!("Failed to write CSV report: {}", path.display()))?;
    }
    if let Some(path) = &command.json {
        write_json_report(path, &outcome)
            .with_context(|| format!("Failed to write JSON report: {}", path.display()))?;
    }

    if !command.quiet {
        output::print_audit_summary(&command.input, &outcome, command.limit);
        if let Some(path) = &command.csv {
            output::print_success(&format!("CSV report written to {}", path.display()));
        }
        if let Some(path) = &command.json {
            output::print_success(&format!("JSON report written to {}", path.display()));
        }
    }

    Ok(ExitStatus::from_summary_with_threshold(
        outcome.summary(),
        command.options.severity_threshold,
    ))
}
