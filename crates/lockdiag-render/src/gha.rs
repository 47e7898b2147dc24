use crate::{RenderableReport, RenderableSeverity};

/// Render diagnostics as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col}::[{code}] {message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for d in &report.diagnostics {
        let level = match d.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut meta = String::new();
        if let Some(path) = &d.file_path {
            meta.push_str(&format!("file={}", escape_property(path)));
            if let Some(line) = d.line {
                meta.push_str(&format!(",line={line}"));
            }
            if let Some(col) = d.col {
                meta.push_str(&format!(",col={col}"));
            }
        }

        let mut text = format!("[{}] {}", d.code, d.message);
        if !d.parent_target.is_empty() {
            text.push_str(&format!(" ({})", d.parent_target));
        }
        let message = escape_data(&text);

        if meta.is_empty() {
            out.push(format!("::{level}::{message}"));
        } else {
            out.push(format!("::{level} {meta}::{message}"));
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
