//! # rowaudit report
//!
//! Serializes audit results for downstream tooling:
//!
//! - **CSV**: one row per issue with `record_index, column, value, severity, message`
//! - **JSON**: the summary plus the full issue list, readable back with
//!   [`read_json_report`]
//!
//! ## Example
//!
//! ```rust
//! use rowaudit_core::{AuditOutcome, Finding, Issue};
//! use rowaudit_report::AuditReport;
//!
//! let outcome = AuditOutcome::new(1, vec![Issue::new(1, "name", "", Finding::error("missing value"))]);
//! let json = AuditReport::from_outcome(&outcome).to_json_string().unwrap();
//!
//! let parsed = AuditReport::from_json_str(&json).unwrap();
//! assert_eq!(parsed.issues, outcome.issues());
//! ```

mod csv;
mod error;
mod json;

pub use csv::*;
pub use error::*;
pub use json::*;
