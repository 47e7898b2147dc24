use crate::codes::CodeSet;
use lockdiag_types::{LogCode, LogLevel, Severity};

/// Severity implied by the log level alone.
pub fn base_severity(level: LogLevel) -> Severity {
    match level {
        LogLevel::Error => Severity::Error,
        LogLevel::Warning => Severity::Warning,
        LogLevel::Information | LogLevel::Minimal | LogLevel::Verbose | LogLevel::Debug => {
            Severity::Info
        }
    }
}

/// Final severity of an entry after escalation.
///
/// When `treat_all_warnings_as_errors` escalates a warning, the per-code set is not consulted.
/// Otherwise membership in `warn_as_error` forces `Error` from any level, info included.
pub fn resolve_severity(
    level: LogLevel,
    code: &LogCode,
    warn_as_error: &CodeSet,
    treat_all_warnings_as_errors: bool,
) -> Severity {
    let severity = base_severity(level);
    if treat_all_warnings_as_errors && severity == Severity::Warning {
        Severity::Error
    } else if warn_as_error.contains(code) {
        Severity::Error
    } else {
        severity
    }
}
