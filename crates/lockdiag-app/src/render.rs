//! Render use cases: markdown and GitHub annotations from in-memory reports.

use lockdiag_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    lockdiag_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    lockdiag_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockdiag_render::{
        RenderableData, RenderableDiagnostic, RenderableSeverity, RenderableVerdictStatus,
    };

    fn sample_report() -> RenderableReport {
        let diagnostic = |severity, code: &str| RenderableDiagnostic {
            severity,
            code: code.to_string(),
            message: "Sample".to_string(),
            file_path: None,
            line: None,
            col: None,
            parent_target: String::new(),
            parent_package: String::new(),
        };
        RenderableReport {
            verdict: RenderableVerdictStatus::Warn,
            diagnostics: vec![
                diagnostic(RenderableSeverity::Warning, "NU1603"),
                diagnostic(RenderableSeverity::Info, "NU1100"),
            ],
            data: RenderableData {
                entries_total: 2,
                diagnostics_emitted: 2,
                warning: 1,
                info: 1,
                ..RenderableData::default()
            },
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let report = sample_report();
        assert_eq!(render_annotations(&report, 1).len(), 1);
        assert_eq!(render_annotations(&report, 10).len(), 2);
    }

    #[test]
    fn render_markdown_smoke() {
        let markdown = render_markdown(&sample_report());
        assert!(markdown.contains("NU1603"));
    }
}
