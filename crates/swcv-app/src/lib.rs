//! Use case orchestration for swcv.
//!
//! This crate provides the application layer: use cases that coordinate the domain,
//! archive, settings and render layers. The CLI crate depends on this; it only handles
//! argument parsing, process IO and exit codes.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod inventory;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use inventory::run_inventory;
pub use render::{render_annotations, render_inventory, render_markdown, render_text};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
