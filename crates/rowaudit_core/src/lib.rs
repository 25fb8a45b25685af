//! # rowaudit core
//!
//! Core data structures and types for the rowaudit data quality auditor.
//!
//! An audit takes a delimited dataset, runs a fixed set of field validators
//! over every record and reports each problem as an [`Issue`] with a
//! [`Severity`]. This crate holds the vocabulary shared by the reader,
//! the validators, the report writers and the CLI.
//!
//! ## Key Concepts
//!
//! - **Schema**: which [`FieldType`]s apply to which columns
//! - **Issue**: one problem tied to a record and a column
//! - **Summary**: counts over all issues of a run
//! - **ExitStatus**: the automation-facing result derived from a summary
//!
//! ## Example
//!
//! ```rust
//! use rowaudit_core::{ExitStatus, Finding, Issue, Summary};
//!
//! let issues = vec![Issue::new(1, "name", "", Finding::error("missing value"))];
//! let summary = Summary::from_issues(1, &issues);
//!
//! assert_eq!(summary.total_issues(), 1);
//! assert_eq!(ExitStatus::from_summary(&summary).code(), 2);
//! ```

pub mod builder;
pub mod dataset;
pub mod error;
pub mod model;
pub mod options;
pub mod reference;
pub mod schema;
pub mod summary;

pub use builder::*;
pub use dataset::*;
pub use error::*;
pub use model::*;
pub use options::*;
pub use reference::*;
pub use schema::*;
pub use summary::*;
