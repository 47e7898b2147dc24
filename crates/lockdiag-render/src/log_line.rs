use lockdiag_types::Severity;

/// One build-log line: a severity tag followed by the message.
pub fn render_log_line(severity: Severity, message: &str) -> String {
    let tag = match severity {
        Severity::Error => "[ERROR]",
        Severity::Warning => "[WARNING]",
        Severity::Info => "[INFO]",
    };
    format!("{tag}: {message}")
}
