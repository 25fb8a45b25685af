//! # rowaudit validator
//!
//! Validation engine for rowaudit. This crate provides:
//!
//! - Field validators for email, date, country code, age and required values
//! - The row auditor, applying a schema to one record
//! - The dataset auditor, running a full pass and computing the summary
//! - Default reference data (ISO 3166-1 countries, accepted date formats)
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rowaudit_core::{AuditOptions, DataSet, FieldType, SchemaBuilder};
//! use rowaudit_validator::DatasetAuditor;
//!
//! let schema = SchemaBuilder::new()
//!     .column("name", FieldType::Required)
//!     .column("email", FieldType::Email)
//!     .build()
//!     .unwrap();
//! let options = AuditOptions::new()
//!     .with_reference_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
//! let auditor = DatasetAuditor::new(schema, &options);
//!
//! let columns = vec!["name".to_string(), "email".to_string()];
//! let records = vec![vec!["".to_string(), "not-an-email".to_string()]];
//! let outcome = auditor.audit(&DataSet::from_records(columns, records)).unwrap();
//!
//! assert_eq!(outcome.summary().total_issues(), 2);
//! assert_eq!(outcome.exit_status().code(), 2);
//! ```

mod countries;
mod engine;
mod error;
mod fields;
mod reference;
mod row;

pub use engine::*;
pub use error::*;
pub use fields::*;
pub use reference::*;
pub use row::*;
