//! Reports written from a real audit pass and read back from disk.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rowaudit_core::{AuditOptions, AuditOutcome, Schema};
use rowaudit_reader::{ReaderOptions, read_str};
use rowaudit_report::{read_json_report, write_csv_report, write_json_report};
use rowaudit_validator::DatasetAuditor;
use tempfile::TempDir;

const CUSTOMERS: &str = "\
id,name,email,age,country,signup_date
1,Ana,ana@example.com,34,ES,2020-01-15
2,,bob@example,200,ZZ,2099-01-01
3,\"Doe, Jane\",jane@example.org,abc,United Kingdom,15/03/2021
";

fn audit(csv: &str) -> AuditOutcome {
    let dataset = read_str(csv, &ReaderOptions::default()).unwrap();
    let options = AuditOptions::new().with_reference_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    DatasetAuditor::new(Schema::builtin(), &options)
        .audit(&dataset)
        .unwrap()
}

#[test]
fn test_json_report_reads_back_identically() {
    let outcome = audit(CUSTOMERS);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    write_json_report(&path, &outcome).unwrap();
    let report = read_json_report(&path).unwrap();

    assert_eq!(report.issues, outcome.issues());
    assert_eq!(&report.summary, outcome.summary());
    assert_eq!(report.summary.total_records(), 3);
}

#[test]
fn test_csv_report_has_one_row_per_issue() {
    let outcome = audit(CUSTOMERS);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("issues.csv");

    write_csv_report(&path, outcome.issues()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines[0], "record_index,column,value,severity,message");
    assert_eq!(lines.len(), outcome.issues().len() + 1);
    assert!(lines[1].starts_with("3,name,,error,"), "{}", lines[1]);
    assert!(lines.iter().skip(1).all(|l| !l.starts_with("2,")));
}

#[test]
fn test_csv_report_reads_back_through_reader() {
    let outcome = audit(CUSTOMERS);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("issues.csv");
    write_csv_report(&path, outcome.issues()).unwrap();

    let report = rowaudit_reader::read_path(&path, &ReaderOptions::default()).unwrap();
    assert_eq!(
        report.columns(),
        &["record_index", "column", "value", "severity", "message"]
    );
    assert_eq!(report.len(), outcome.issues().len());

    for (row, issue) in report.records().zip(outcome.issues()) {
        assert_eq!(row[0], issue.record_index.to_string());
        assert_eq!(row[1], issue.column);
        assert_eq!(row[2], issue.value);
        assert_eq!(row[3], issue.severity.as_str());
        assert_eq!(row[4], issue.message);
    }
}

#[test]
fn test_clean_audit_writes_header_only() {
    let outcome = audit(
        "id,name,email,age,country,signup_date\n1,Ana,ana@example.com,34,ES,2020-01-15\n",
    );
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("issues.csv");
    let json_path = dir.path().join("report.json");

    write_csv_report(&csv_path, outcome.issues()).unwrap();
    write_json_report(&json_path, &outcome).unwrap();

    assert_eq!(
        std::fs::read_to_string(&csv_path).unwrap(),
        "record_index,column,value,severity,message\n"
    );
    let report = read_json_report(&json_path).unwrap();
    assert!(report.issues.is_empty());
    assert!(report.summary.is_clean());
}

#[test]
fn test_unwritable_path_is_io_error() {
    let outcome = audit(CUSTOMERS);
    let err = write_json_report("no/such/dir/report.json", &outcome).unwrap_err();
    assert!(matches!(err, rowaudit_report::ReportError::Io { .. }));
}
