use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Stable schema identifier for lockdiag reports.
pub const SCHEMA_REPORT_V1: &str = "lockdiag.report.v1";

/// Build diagnostic severity. Serialized as `"Error"`, `"Warning"`, `"Info"`, which is what
/// downstream dependency views key on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted diagnostic: a raw log entry attributed to (at most) one target graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    /// Empty when the log entry carried no file path.
    pub file_path: String,
    pub severity: Severity,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    /// Target graph name, empty when the entry applies to no target graph.
    pub parent_target: String,
    /// `{name}/{version}` of the library in `parent_target`, empty when unattributed.
    pub parent_package: String,

    /// Stable identifier for dedup across runs:
    /// `sha256(code | message | file_path | parent_target | parent_package)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

/// Lockdiag-specific summary payload for the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LockdiagData {
    /// Assets file the log entries were read from.
    pub assets_file: String,
    pub profile: String,

    pub entries_total: u32,
    pub entries_suppressed: u32,
    pub entries_emitted: u32,
    pub diagnostics_emitted: u32,
    pub log_lines_written: u32,

    pub counts: DiagnosticCounts,

    pub treat_warnings_as_errors: bool,
    /// Recognized codes escalated to errors, sorted.
    #[serde(default)]
    pub warn_as_error: Vec<String>,
    /// Recognized codes suppressed, sorted.
    #[serde(default)]
    pub no_warn: Vec<String>,
}

/// Report envelope.
///
/// Kept generic so the outer shape stays stable while the payload evolves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = LockdiagData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub diagnostics: Vec<Diagnostic>,
    pub data: TData,
}

pub type LockdiagReport = ReportEnvelope<LockdiagData>;
