use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Restore diagnostics\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let data = &report.data;
    out.push_str(&format!(
        "- Verdict: **{}**\n- Log entries: {} ({} suppressed)\n- Diagnostics: {} ({} error, {} warning, {} info)\n\n",
        verdict,
        data.entries_total,
        data.entries_suppressed,
        data.diagnostics_emitted,
        data.error,
        data.warning,
        data.info
    ));

    if report.diagnostics.is_empty() {
        out.push_str("No diagnostics.\n");
        return out;
    }

    out.push_str("## Diagnostics\n\n");

    for d in &report.diagnostics {
        let sev = match d.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        out.push_str(&format!("- [{}] `{}`: {}", sev, d.code, d.message));
        if let Some(path) = &d.file_path {
            out.push_str(&format!(" (`{}`:{})", path, d.line.unwrap_or(0)));
        }
        out.push('\n');

        if !d.parent_target.is_empty() {
            out.push_str(&format!("  - target: `{}`\n", d.parent_target));
        }
        if !d.parent_package.is_empty() {
            out.push_str(&format!("  - package: `{}`\n", d.parent_package));
        }
    }

    out
}
