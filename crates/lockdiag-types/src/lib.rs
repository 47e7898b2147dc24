//! Stable DTOs and IDs used across the lockdiag workspace.
//!
//! This crate is intentionally boring:
//! - restore log codes and log levels as they appear in an assets file
//! - data types for the emitted diagnostics and report envelope
//! - stable string IDs for tool-level diagnostics
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod code;
pub mod explain;
pub mod ids;
pub mod level;
pub mod receipt;

pub use code::{KnownCode, LogCode, KNOWN_CODES};
pub use explain::{lookup_explanation, Explanation};
pub use level::LogLevel;
pub use receipt::{
    Diagnostic, DiagnosticCounts, LockdiagData, LockdiagReport, ReportEnvelope, Severity, ToolMeta,
    Verdict, SCHEMA_REPORT_V1,
};
