//! Property-based tests for the resolution pass.
//!
//! Invariants covered:
//! - one build-log line per emitted entry, regardless of fan-out width
//! - suppression wins over every form of escalation
//! - the pass is a pure function of its inputs

use crate::emit::VecLogSink;
use crate::engine::report_log_messages;
use crate::model::{LockFileModel, RawLogEntry};
use crate::policy::EffectiveConfig;
use crate::test_support::{lock_file, NET461, NETCORE};
use lockdiag_types::{Diagnostic, LogCode, LogLevel, Severity, KNOWN_CODES};
use proptest::prelude::*;

fn arb_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

fn arb_code() -> impl Strategy<Value = LogCode> {
    prop_oneof![
        4 => prop::sample::select(KNOWN_CODES.to_vec()).prop_map(LogCode::parse),
        1 => prop::string::string_regex("[A-Z]{2}[0-9]{4}")
            .unwrap()
            .prop_map(|s| LogCode::parse(&s)),
    ]
}

fn arb_targets() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec![NETCORE, NET461, "net8.0-missing"]),
        0..4,
    )
    .prop_map(|ids| ids.into_iter().map(str::to_string).collect())
}

fn arb_entry() -> impl Strategy<Value = RawLogEntry> {
    (
        arb_code(),
        arb_level(),
        "[a-zA-Z ]{0,24}",
        prop::option::of(prop::sample::select(vec!["LibA", "libb", "LibZ", ""])),
        arb_targets(),
    )
        .prop_map(|(code, level, message, library, targets)| {
            let mut entry = RawLogEntry::new(code, level, message);
            entry.library_id = library.map(str::to_string);
            entry.target_graph_ids = targets;
            entry
        })
}

/// A `,`/`;` separated list mixing known codes and junk.
fn arb_code_list() -> impl Strategy<Value = Option<String>> {
    let token = prop_oneof![
        3 => prop::sample::select(KNOWN_CODES.to_vec()).prop_map(str::to_string),
        1 => "[a-z0-9!@# ]{0,6}",
    ];
    prop::option::of(
        prop::collection::vec((token, prop::sample::select(vec![",", ";"])), 0..6).prop_map(
            |parts| {
                parts
                    .into_iter()
                    .map(|(t, sep)| format!("{t}{sep}"))
                    .collect::<String>()
            },
        ),
    )
}

fn arb_config() -> impl Strategy<Value = EffectiveConfig> {
    (any::<bool>(), arb_code_list(), arb_code_list()).prop_map(|(twae, wae, nw)| {
        EffectiveConfig::from_raw("default", twae, wae.as_deref(), nw.as_deref())
    })
}

fn run(lock: &LockFileModel, cfg: &EffectiveConfig) -> (Vec<Diagnostic>, VecLogSink) {
    let mut out = Vec::new();
    let mut log = VecLogSink::default();
    report_log_messages(lock, cfg, &mut out, &mut log);
    (out, log)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn one_log_line_per_emitted_entry(
        entries in prop::collection::vec(arb_entry(), 0..12),
        cfg in arb_config(),
    ) {
        let lock = LockFileModel { log_messages: entries.clone(), ..lock_file() };
        let mut out = Vec::new();
        let mut log = VecLogSink::default();
        let report = report_log_messages(&lock, &cfg, &mut out, &mut log);

        let emitted: Vec<&RawLogEntry> =
            entries.iter().filter(|e| !cfg.is_suppressed(&e.code)).collect();
        prop_assert_eq!(log.lines.len(), emitted.len());
        prop_assert_eq!(report.log_lines_written as usize, emitted.len());
        prop_assert_eq!(report.diagnostics_emitted as usize, out.len());
        prop_assert!(out.len() >= emitted.len());
        prop_assert_eq!(
            report.entries_total,
            report.entries_emitted + report.entries_suppressed
        );

        let expected_width: usize = emitted
            .iter()
            .map(|e| {
                e.target_graph_ids
                    .iter()
                    .filter(|id| id.as_str() == NETCORE || id.as_str() == NET461)
                    .count()
                    .max(1)
            })
            .sum();
        prop_assert_eq!(out.len(), expected_width);
    }

    #[test]
    fn suppression_dominates_escalation(
        entries in prop::collection::vec(arb_entry(), 0..12),
        cfg in arb_config(),
    ) {
        let mut cfg = cfg;
        for entry in &entries {
            if let Some(known) = entry.code.known() {
                cfg.warn_as_error.insert(known);
            }
        }
        cfg.treat_warnings_as_errors = true;

        let lock = LockFileModel { log_messages: entries, ..lock_file() };
        let (out, log) = run(&lock, &cfg);

        for d in &out {
            prop_assert!(!cfg.is_suppressed(&LogCode::parse(&d.code)));
        }
        for line in &log.lines {
            prop_assert!(!cfg.is_suppressed(&LogCode::parse(&line.code)));
        }
    }

    #[test]
    fn global_flag_leaves_no_warnings(
        entries in prop::collection::vec(arb_entry(), 0..12),
        cfg in arb_config(),
    ) {
        let mut cfg = cfg;
        cfg.treat_warnings_as_errors = true;

        let lock = LockFileModel { log_messages: entries, ..lock_file() };
        let (out, _) = run(&lock, &cfg);

        prop_assert!(out.iter().all(|d| d.severity != Severity::Warning));
    }

    #[test]
    fn pass_is_deterministic(
        entries in prop::collection::vec(arb_entry(), 0..12),
        cfg in arb_config(),
    ) {
        let lock = LockFileModel { log_messages: entries, ..lock_file() };
        let (first, first_log) = run(&lock, &cfg);
        let (second, second_log) = run(&lock, &cfg);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_log.lines, second_log.lines);
    }
}
