//! Stable DTOs and IDs used across the swcv workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted receipt/report
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{Finding, SCHEMA_REPORT_V1, Severity, SwcvData, SwcvReport, ToolMeta, Verdict};
