//! End-to-end audit scenarios over in-memory datasets.
//!
//! These exercise the dataset auditor the way the CLI drives it: a schema,
//! a header plus records, and a pinned reference date.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rowaudit_core::{
    AuditOptions, DataSet, ExitStatus, FieldType, Schema, SchemaBuilder, Severity,
};
use rowaudit_validator::{
    DatasetAuditor, FIRST_RECORD_INDEX, FUTURE_DATE, INVALID_EMAIL, MISSING_VALUE,
    UNKNOWN_COUNTRY,
};

fn options() -> AuditOptions {
    AuditOptions::new().with_reference_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
}

fn members_schema() -> Schema {
    SchemaBuilder::new()
        .column("name", FieldType::Required)
        .column("email", FieldType::Email)
        .column("joined", FieldType::Date)
        .column("country", FieldType::CountryCode)
        .build()
        .unwrap()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn members(records: &[&[&str]]) -> DataSet {
    DataSet::from_records(
        strings(&["name", "email", "joined", "country"]),
        records.iter().map(|r| strings(r)).collect(),
    )
}

#[test]
fn test_every_check_fails_on_one_row() {
    let dataset = members(&[&["", "not-an-email", "2099-01-01", "ZZ"]]);
    let outcome = DatasetAuditor::new(members_schema(), &options())
        .audit(&dataset)
        .unwrap();

    let found: Vec<_> = outcome
        .issues()
        .iter()
        .map(|i| (i.column.as_str(), i.value.as_str(), i.severity, i.message.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            ("name", "", Severity::Error, MISSING_VALUE),
            ("email", "not-an-email", Severity::Warning, INVALID_EMAIL),
            ("joined", "2099-01-01", Severity::Info, FUTURE_DATE),
            ("country", "ZZ", Severity::Warning, UNKNOWN_COUNTRY),
        ]
    );
    assert_eq!(outcome.summary().total_issues(), 4);
    assert!(outcome.issues().iter().all(|i| i.record_index == FIRST_RECORD_INDEX));
    assert_eq!(outcome.exit_status(), ExitStatus::Errors);
    assert_eq!(outcome.exit_status().code(), 2);
}

#[test]
fn test_valid_member_has_no_issues() {
    let dataset = members(&[&["Ana", "a@b.com", "2020-01-01", "ES"]]);
    let outcome = DatasetAuditor::new(members_schema(), &options())
        .audit(&dataset)
        .unwrap();

    assert!(outcome.issues().is_empty());
    assert_eq!(outcome.summary().total_records(), 1);
    assert_eq!(outcome.exit_status().code(), 0);
}

#[test]
fn test_empty_dataset_exits_clean() {
    let outcome = DatasetAuditor::new(members_schema(), &options())
        .audit(&members(&[]))
        .unwrap();

    assert_eq!(outcome.summary().total_records(), 0);
    assert_eq!(outcome.summary().total_issues(), 0);
    assert_eq!(outcome.exit_status().code(), 0);
}

#[test]
fn test_warnings_only_exit_one() {
    let dataset = members(&[
        &["Ana", "a@b.com", "2020-01-01", "ES"],
        &["Bo", "bo-at-example", "2021-05-05", "FR"],
    ]);
    let outcome = DatasetAuditor::new(members_schema(), &options())
        .audit(&dataset)
        .unwrap();

    assert_eq!(outcome.issues().len(), 1);
    assert_eq!(outcome.issues()[0].record_index, 3);
    assert_eq!(outcome.exit_status().code(), 1);
    assert_eq!(
        ExitStatus::from_summary_with_threshold(outcome.summary(), Severity::Error),
        ExitStatus::Clean
    );
}

#[test]
fn test_future_date_alone_does_not_fail() {
    let dataset = members(&[&["Ana", "a@b.com", "2030-01-01", "ES"]]);
    let outcome = DatasetAuditor::new(members_schema(), &options())
        .audit(&dataset)
        .unwrap();

    assert_eq!(outcome.summary().counts_by_severity().info, 1);
    assert_eq!(outcome.exit_status(), ExitStatus::Clean);
}

#[test]
fn test_builtin_schema_on_realistic_records() {
    let dataset = DataSet::from_records(
        strings(&["id", "name", "email", "age", "country", "signup_date"]),
        vec![
            strings(&["1", "Ana", "ana@example.com", "34", "Spain", "2023-04-01"]),
            strings(&["2", "Bo", "", "abc", "UK", "01/02/2024"]),
            strings(&["3", "Cy", "cy@example", "130", "Narnia", "2024/13/01"]),
        ],
    );
    let outcome = DatasetAuditor::new(Schema::builtin(), &options())
        .audit(&dataset)
        .unwrap();

    let found: Vec<_> = outcome
        .issues()
        .iter()
        .map(|i| (i.record_index, i.column.as_str(), i.severity))
        .collect();
    assert_eq!(
        found,
        vec![
            (3, "email", Severity::Error),
            (3, "age", Severity::Warning),
            (4, "email", Severity::Warning),
            (4, "age", Severity::Warning),
            (4, "country", Severity::Warning),
            (4, "signup_date", Severity::Error),
        ]
    );
}

#[test]
fn test_blank_profile_fields_are_missing() {
    let dataset = DataSet::from_records(
        strings(&["id", "name", "email", "age", "country", "signup_date"]),
        vec![strings(&["1", "Ana", "ana@example.com", "", "  ", ""])],
    );
    let outcome = DatasetAuditor::new(Schema::builtin(), &options())
        .audit(&dataset)
        .unwrap();

    let found: Vec<_> = outcome
        .issues()
        .iter()
        .map(|i| (i.record_index, i.column.as_str(), i.severity, i.message.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (2, "age", Severity::Error, MISSING_VALUE),
            (2, "country", Severity::Error, MISSING_VALUE),
            (2, "signup_date", Severity::Error, MISSING_VALUE),
        ]
    );
    assert_eq!(outcome.exit_status().code(), 2);
}

#[test]
fn test_record_index_matches_file_line() {
    let dataset = members(&[
        &["Ana", "a@b.com", "2020-01-01", "ES"],
        &["Bo", "b@c.com", "2020-01-01", "ES"],
        &["", "c@d.com", "2020-01-01", "ES"],
    ]);
    let outcome = DatasetAuditor::new(members_schema(), &options())
        .audit(&dataset)
        .unwrap();

    // header is line 1, so the third data record sits on line 4
    assert_eq!(outcome.issues().len(), 1);
    assert_eq!(outcome.issues()[0].record_index, 4);
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Ana".to_string()),
        Just("a@b.com".to_string()),
        Just("not-an-email".to_string()),
        Just("2020-01-01".to_string()),
        Just("2099-12-31".to_string()),
        Just("31/02/2020".to_string()),
        Just("ES".to_string()),
        Just("ZZ".to_string()),
        "[ -~]{0,12}",
    ]
}

fn dataset_strategy() -> impl Strategy<Value = DataSet> {
    prop::collection::vec(prop::collection::vec(value_strategy(), 0..=4), 0..24).prop_map(
        |records| {
            DataSet::from_records(strings(&["name", "email", "joined", "country"]), records)
        },
    )
}

proptest! {
    #[test]
    fn prop_audit_is_idempotent(dataset in dataset_strategy()) {
        let auditor = DatasetAuditor::new(members_schema(), &options());
        let first = auditor.audit(&dataset).unwrap();
        let second = auditor.audit(&dataset).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_summary_matches_issues(dataset in dataset_strategy()) {
        let outcome = DatasetAuditor::new(members_schema(), &options())
            .audit(&dataset)
            .unwrap();
        let summary = outcome.summary();

        prop_assert_eq!(summary.total_records(), dataset.len());
        prop_assert_eq!(summary.total_issues(), outcome.issues().len());
        prop_assert_eq!(summary.counts_by_severity().total(), summary.total_issues());
        prop_assert!(outcome
            .issues()
            .iter()
            .all(|i| i.record_index >= 2 && i.record_index <= dataset.len() + 1));
    }

    #[test]
    fn prop_issues_ordered_by_record(dataset in dataset_strategy()) {
        let outcome = DatasetAuditor::new(members_schema(), &options())
            .audit(&dataset)
            .unwrap();
        let indices: Vec<usize> = outcome.issues().iter().map(|i| i.record_index).collect();
        let mut sorted = indices.clone();
        sorted.sort();
        prop_assert_eq!(indices, sorted);
    }
}
