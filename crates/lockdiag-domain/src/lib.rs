//! Pure diagnostic resolution (no IO).
//!
//! Input: raw restore log entries and a target graph lookup, constructed elsewhere.
//! Output: diagnostics appended to a collector, at most one build-log line per entry, and
//! summary counts.

#![forbid(unsafe_code)]

pub mod codes;
pub mod emit;
pub mod fanout;
pub mod model;
pub mod policy;
pub mod report;
pub mod severity;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use codes::{parse_code_set, CodeSet};
pub use emit::{DiagnosticCollector, Emission, LogLine, LogSink, VecLogSink};
pub use engine::{report_entries, report_log_messages};
pub use fanout::FanOut;
