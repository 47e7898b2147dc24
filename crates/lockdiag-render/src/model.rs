#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDiagnostic {
    pub severity: RenderableSeverity,
    pub code: String,
    pub message: String,
    /// `None` when the diagnostic has no file.
    pub file_path: Option<String>,
    /// 1-based; `None` when unknown.
    pub line: Option<u32>,
    pub col: Option<u32>,
    pub parent_target: String,
    pub parent_package: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableData {
    pub entries_total: u32,
    pub entries_suppressed: u32,
    pub diagnostics_emitted: u32,
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub diagnostics: Vec<RenderableDiagnostic>,
    pub data: RenderableData,
}
