use crate::emit::{emit, DiagnosticCollector, Emission, LogSink};
use crate::fanout;
use crate::model::{LockFileModel, RawLogEntry, TargetGraphLookup};
use crate::policy::EffectiveConfig;
use crate::report::{DomainReport, SeverityCounts};
use crate::severity::resolve_severity;

/// Report every log message of `lock_file`, resolving target graphs against the same file.
pub fn report_log_messages<C, L>(
    lock_file: &LockFileModel,
    cfg: &EffectiveConfig,
    collector: &mut C,
    log: &mut L,
) -> DomainReport
where
    C: DiagnosticCollector + ?Sized,
    L: LogSink + ?Sized,
{
    report_entries(&lock_file.log_messages, lock_file, cfg, collector, log)
}

/// Single pass over `entries` in order. Never fails: unresolvable codes, graphs and libraries
/// degrade to empty fields.
pub fn report_entries<G, C, L>(
    entries: &[RawLogEntry],
    graphs: &G,
    cfg: &EffectiveConfig,
    collector: &mut C,
    log: &mut L,
) -> DomainReport
where
    G: TargetGraphLookup + ?Sized,
    C: DiagnosticCollector + ?Sized,
    L: LogSink + ?Sized,
{
    let mut entries_suppressed = 0u32;
    let mut entries_emitted = 0u32;
    let mut diagnostics_emitted = 0u32;
    let mut counts = SeverityCounts::default();

    for entry in entries {
        if cfg.is_suppressed(&entry.code) {
            entries_suppressed = entries_suppressed.saturating_add(1);
            continue;
        }

        let targets = fanout::expand(entry, graphs);
        let severity = resolve_severity(
            entry.level,
            &entry.code,
            &cfg.warn_as_error,
            cfg.treat_warnings_as_errors,
        );

        match emit(entry, &targets, severity, &cfg.no_warn, collector, log) {
            Emission::Suppressed => entries_suppressed = entries_suppressed.saturating_add(1),
            Emission::Emitted { diagnostics } => {
                let n = saturating_count(diagnostics);
                entries_emitted = entries_emitted.saturating_add(1);
                diagnostics_emitted = diagnostics_emitted.saturating_add(n);
                counts.record(severity, n);
            }
        }
    }

    DomainReport {
        verdict: counts.verdict(),
        entries_total: saturating_count(entries.len()),
        entries_suppressed,
        entries_emitted,
        diagnostics_emitted,
        // The emitter logs exactly the first instance of every emitted entry.
        log_lines_written: entries_emitted,
        counts,
    }
}

/// Counters are `u32` in the report; larger inputs pin at `u32::MAX`.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
