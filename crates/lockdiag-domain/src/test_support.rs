use crate::model::{LockFileModel, RawLogEntry, TargetGraph};
use crate::policy::EffectiveConfig;
use lockdiag_types::{LogCode, LogLevel};

pub const NETCORE: &str = ".NETCoreApp,Version=v1.0";
pub const NET461: &str = ".NETFramework,Version=v4.6.1";

pub fn entry(code: &str, level: LogLevel, message: &str) -> RawLogEntry {
    RawLogEntry::new(LogCode::parse(code), level, message)
}

fn graph(name: &str) -> TargetGraph {
    TargetGraph::new(name)
        .with_library("LibA", "1.2.3")
        .with_library("LibB", "1.2.3")
        .with_library("LibC", "1.2.3")
}

/// Two target graphs, each resolving LibA, LibB and LibC at 1.2.3. No log messages.
pub fn lock_file() -> LockFileModel {
    LockFileModel {
        targets: vec![graph(NETCORE), graph(NET461)],
        log_messages: Vec::new(),
    }
}

pub fn lock_file_with(log_messages: Vec<RawLogEntry>) -> LockFileModel {
    LockFileModel {
        log_messages,
        ..lock_file()
    }
}

/// NU1000 and NU1001 at error and warning, then NU1002 and NU1100 as information.
pub fn mixed_entries() -> Vec<RawLogEntry> {
    vec![
        entry("NU1000", LogLevel::Error, "Sample error"),
        entry("NU1000", LogLevel::Warning, "Sample warning"),
        entry("NU1001", LogLevel::Error, "Sample error"),
        entry("NU1001", LogLevel::Warning, "Sample warning"),
        entry("NU1002", LogLevel::Information, "Sample message"),
        entry("NU1100", LogLevel::Information, "Sample message"),
    ]
}

pub fn config(
    treat_warnings_as_errors: bool,
    warn_as_error: Option<&str>,
    no_warn: Option<&str>,
) -> EffectiveConfig {
    EffectiveConfig::from_raw("default", treat_warnings_as_errors, warn_as_error, no_warn)
}
