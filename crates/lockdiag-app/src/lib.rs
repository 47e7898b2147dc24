//! Use case orchestration for lockdiag.
//!
//! The application layer wires the assets adapter, settings, domain engine and renderers
//! together. The CLI crate depends on this and only handles argument parsing, files and exit
//! codes.

#![forbid(unsafe_code)]

mod diagnose;
mod explain;
mod render;
mod report;

pub use diagnose::{run_report, BuildLog, ReportInput, ReportOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
