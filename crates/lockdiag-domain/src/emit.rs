use crate::codes::CodeSet;
use crate::fanout::FanOut;
use crate::fingerprint::fingerprint_for_diagnostic;
use crate::model::RawLogEntry;
use lockdiag_types::{Diagnostic, Severity};

/// Append-only destination for emitted diagnostics, in emission order.
pub trait DiagnosticCollector {
    fn push(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticCollector for Vec<Diagnostic> {
    fn push(&mut self, diagnostic: Diagnostic) {
        Vec::push(self, diagnostic);
    }
}

/// Line-oriented build log. Called at most once per emitted log entry.
pub trait LogSink {
    fn log(&mut self, severity: Severity, diagnostic: &Diagnostic);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

/// Log sink that records lines in memory.
#[derive(Clone, Debug, Default)]
pub struct VecLogSink {
    pub lines: Vec<LogLine>,
}

impl LogSink for VecLogSink {
    fn log(&mut self, severity: Severity, diagnostic: &Diagnostic) {
        self.lines.push(LogLine {
            severity,
            code: diagnostic.code.clone(),
            message: diagnostic.message.clone(),
        });
    }
}

/// What happened to one log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emission {
    Suppressed,
    Emitted { diagnostics: usize },
}

/// Emit the diagnostics for one entry.
///
/// Entries whose code is in `no_warn` produce nothing. Otherwise every fan-out instance becomes a
/// diagnostic, and only the first one is forwarded to `log`.
pub fn emit<C, L>(
    entry: &RawLogEntry,
    fan_out: &[FanOut],
    severity: Severity,
    no_warn: &CodeSet,
    collector: &mut C,
    log: &mut L,
) -> Emission
where
    C: DiagnosticCollector + ?Sized,
    L: LogSink + ?Sized,
{
    if no_warn.contains(&entry.code) {
        return Emission::Suppressed;
    }

    let code = entry.code.as_str();
    let file_path = entry.file_path.as_deref().unwrap_or_default();

    let mut logged = false;
    for target in fan_out {
        let diagnostic = Diagnostic {
            code: code.to_string(),
            message: entry.message.clone(),
            file_path: file_path.to_string(),
            severity,
            start_line: entry.start_line,
            start_column: entry.start_column,
            end_line: entry.end_line,
            end_column: entry.end_column,
            parent_target: target.parent_target.clone(),
            parent_package: target.parent_package.clone(),
            fingerprint: Some(fingerprint_for_diagnostic(
                code,
                &entry.message,
                file_path,
                &target.parent_target,
                &target.parent_package,
            )),
        };

        if !logged {
            log.log(severity, &diagnostic);
            logged = true;
        }
        collector.push(diagnostic);
    }

    Emission::Emitted {
        diagnostics: fan_out.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::parse_code_set;
    use crate::test_support::entry;
    use lockdiag_types::LogLevel;

    fn fan(targets: &[(&str, &str)]) -> Vec<FanOut> {
        targets
            .iter()
            .map(|(t, p)| FanOut {
                parent_target: t.to_string(),
                parent_package: p.to_string(),
            })
            .collect()
    }

    #[test]
    fn suppressed_entry_emits_nothing() {
        let e = entry("NU1000", LogLevel::Error, "boom");
        let no_warn = parse_code_set(Some("nu1000"));
        let mut out: Vec<Diagnostic> = Vec::new();
        let mut log = VecLogSink::default();

        let result = emit(
            &e,
            &fan(&[("a", ""), ("b", "")]),
            Severity::Error,
            &no_warn,
            &mut out,
            &mut log,
        );

        assert_eq!(result, Emission::Suppressed);
        assert!(out.is_empty());
        assert!(log.lines.is_empty());
    }

    #[test]
    fn logs_only_first_instance() {
        let mut e = entry("NU1000", LogLevel::Warning, "Sample warning");
        e.file_path = Some("path/to/project.csproj".to_string());
        e.start_line = 3;
        let mut out: Vec<Diagnostic> = Vec::new();
        let mut log = VecLogSink::default();

        let result = emit(
            &e,
            &fan(&[("net8.0", "LibA/1.2.3"), ("net48", "LibA/1.2.3")]),
            Severity::Warning,
            &CodeSet::new(),
            &mut out,
            &mut log,
        );

        assert_eq!(result, Emission::Emitted { diagnostics: 2 });
        assert_eq!(out.len(), 2);
        assert_eq!(log.lines.len(), 1);
        assert_eq!(log.lines[0].message, "Sample warning");
        assert_eq!(log.lines[0].severity, Severity::Warning);

        assert_eq!(out[0].parent_target, "net8.0");
        assert_eq!(out[1].parent_target, "net48");
        for d in &out {
            assert_eq!(d.code, "NU1000");
            assert_eq!(d.file_path, "path/to/project.csproj");
            assert_eq!(d.start_line, 3);
            assert_eq!(d.severity, Severity::Warning);
        }
        assert_ne!(out[0].fingerprint, out[1].fingerprint);
    }

    #[test]
    fn missing_file_path_is_empty_string() {
        let e = entry("NU1001", LogLevel::Error, "m");
        let mut out: Vec<Diagnostic> = Vec::new();
        let mut log = VecLogSink::default();

        emit(&e, &[FanOut::default()], Severity::Error, &CodeSet::new(), &mut out, &mut log);

        assert_eq!(out[0].file_path, "");
        assert_eq!(out[0].parent_target, "");
        assert_eq!(out[0].parent_package, "");
    }

    #[test]
    fn unrecognized_code_is_emitted_with_literal_text() {
        let e = entry("CA1000", LogLevel::Warning, "m");
        let no_warn = parse_code_set(Some("CA1000;NU1000"));
        let mut out: Vec<Diagnostic> = Vec::new();
        let mut log = VecLogSink::default();

        emit(&e, &[FanOut::default()], Severity::Warning, &no_warn, &mut out, &mut log);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, "CA1000");
        assert_eq!(log.lines[0].code, "CA1000");
    }
}
