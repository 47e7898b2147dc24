//! The `report` use case: read an assets file, resolve its log messages, build the report.

use anyhow::Context;
use camino::Utf8Path;
use lockdiag_domain::{report::DomainReport, LogSink};
use lockdiag_render::render_log_line;
use lockdiag_settings::{LockdiagConfigV1, Overrides};
use lockdiag_types::{
    Diagnostic, DiagnosticCounts, LockdiagData, LockdiagReport, ReportEnvelope, Severity,
    ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Input for the report use case.
#[derive(Clone, Debug)]
pub struct ReportInput<'a> {
    /// Path to `project.assets.json`.
    pub assets_file: &'a Utf8Path,
    /// Config file contents (empty string if there is none).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the report use case.
#[derive(Clone, Debug)]
pub struct ReportOutput {
    pub report: LockdiagReport,
    /// Build-log lines in emission order, already tagged (`[ERROR]: ...`).
    pub log_lines: Vec<String>,
}

/// Log sink that renders every line as text.
#[derive(Clone, Debug, Default)]
pub struct BuildLog {
    pub lines: Vec<String>,
}

impl LogSink for BuildLog {
    fn log(&mut self, severity: Severity, diagnostic: &Diagnostic) {
        self.lines
            .push(render_log_line(severity, &diagnostic.message));
    }
}

/// Run the report use case: parse config, read the assets file, resolve every log message.
pub fn run_report(input: ReportInput<'_>) -> anyhow::Result<ReportOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Empty config is allowed, defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        LockdiagConfigV1::default()
    } else {
        lockdiag_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        lockdiag_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let lock_file = lockdiag_assets::read_assets_file(input.assets_file)
        .with_context(|| format!("load assets file {}", input.assets_file))?;

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut log = BuildLog::default();
    let domain_report = lockdiag_domain::report_log_messages(
        &lock_file,
        &resolved.effective,
        &mut diagnostics,
        &mut log,
    );

    tracing::debug!(
        entries = domain_report.entries_total,
        suppressed = domain_report.entries_suppressed,
        diagnostics = domain_report.diagnostics_emitted,
        "resolved restore log"
    );

    let DomainReport {
        verdict,
        entries_total,
        entries_suppressed,
        entries_emitted,
        diagnostics_emitted,
        log_lines_written,
        counts,
    } = domain_report;

    let effective = &resolved.effective;
    let data = LockdiagData {
        assets_file: input.assets_file.to_string(),
        profile: effective.profile.clone(),
        entries_total,
        entries_suppressed,
        entries_emitted,
        diagnostics_emitted,
        log_lines_written,
        counts: DiagnosticCounts::from(&counts),
        treat_warnings_as_errors: effective.treat_warnings_as_errors,
        warn_as_error: effective
            .warn_as_error
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
        no_warn: effective
            .no_warn
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
    };

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "lockdiag".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        diagnostics,
        data,
    };

    Ok(ReportOutput {
        report,
        log_lines: log.lines,
    })
}
