use anyhow::Context;
use lockdiag_render::{
    RenderableData, RenderableDiagnostic, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use lockdiag_types::{
    ids, Diagnostic, DiagnosticCounts, LockdiagData, LockdiagReport, ReportEnvelope, Severity,
    ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<LockdiagReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse lockdiag report")
}

pub fn serialize_report(report: &LockdiagReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &LockdiagReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        diagnostics: report.diagnostics.iter().map(renderable_diagnostic).collect(),
        data: RenderableData {
            entries_total: report.data.entries_total,
            entries_suppressed: report.data.entries_suppressed,
            diagnostics_emitted: report.data.diagnostics_emitted,
            info: report.data.counts.info,
            warning: report.data.counts.warning,
            error: report.data.counts.error,
        },
    }
}

fn renderable_diagnostic(d: &Diagnostic) -> RenderableDiagnostic {
    RenderableDiagnostic {
        severity: match d.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        code: d.code.clone(),
        message: d.message.clone(),
        file_path: (!d.file_path.is_empty()).then(|| d.file_path.clone()),
        // 0 means the assets file carried no position.
        line: (d.start_line > 0).then_some(d.start_line),
        col: (d.start_column > 0).then_some(d.start_column),
        parent_target: d.parent_target.clone(),
        parent_package: d.parent_package.clone(),
    }
}

/// Report written when the tool itself fails before a pass could complete.
pub fn runtime_error_report(assets_file: &str, message: &str) -> LockdiagReport {
    let now = OffsetDateTime::now_utc();

    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "lockdiag".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        diagnostics: vec![Diagnostic {
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            file_path: String::new(),
            severity: Severity::Error,
            start_line: 0,
            start_column: 0,
            end_line: 0,
            end_column: 0,
            parent_target: String::new(),
            parent_package: String::new(),
            fingerprint: None,
        }],
        data: LockdiagData {
            assets_file: assets_file.to_string(),
            profile: "unknown".to_string(),
            diagnostics_emitted: 1,
            counts: DiagnosticCounts {
                info: 0,
                warning: 0,
                error: 1,
            },
            ..LockdiagData::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_report_round_trips() {
        let report =
            runtime_error_report("obj/project.assets.json", "read obj/project.assets.json");
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");

        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["schema"], SCHEMA_REPORT_V1);
        assert_eq!(value["verdict"], "fail");
        assert_eq!(value["diagnostics"][0]["code"], "runtime_error");
        assert_eq!(value["diagnostics"][0]["severity"], "Error");

        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed, report);
    }

    #[test]
    fn rejects_foreign_schema() {
        let err = parse_report_json(r#"{ "schema": "other.report.v2" }"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
        assert!(parse_report_json("not json").is_err());
    }

    #[test]
    fn renderable_drops_empty_fields() {
        let mut report = runtime_error_report("a.json", "boom");
        report.diagnostics.push(Diagnostic {
            code: "NU1603".to_string(),
            message: "m".to_string(),
            file_path: "src/app.csproj".to_string(),
            severity: Severity::Warning,
            start_line: 3,
            start_column: 0,
            end_line: 3,
            end_column: 0,
            parent_target: "net8.0".to_string(),
            parent_package: "LibA/1.2.3".to_string(),
            fingerprint: None,
        });

        let renderable = to_renderable(&report);
        assert_eq!(renderable.verdict, RenderableVerdictStatus::Fail);
        assert_eq!(renderable.data.error, 1);

        let first = &renderable.diagnostics[0];
        assert_eq!(first.file_path, None);
        assert_eq!(first.line, None);

        let second = &renderable.diagnostics[1];
        assert_eq!(second.severity, RenderableSeverity::Warning);
        assert_eq!(second.file_path.as_deref(), Some("src/app.csproj"));
        assert_eq!(second.line, Some(3));
        assert_eq!(second.col, None);
    }
}
