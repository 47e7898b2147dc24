use lockdiag_types::{DiagnosticCounts, Severity, Verdict};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity, n: u32) {
        match severity {
            Severity::Info => self.info += n,
            Severity::Warning => self.warning += n,
            Severity::Error => self.error += n,
        }
    }

    pub fn verdict(&self) -> Verdict {
        if self.error > 0 {
            Verdict::Fail
        } else if self.warning > 0 {
            Verdict::Warn
        } else {
            Verdict::Pass
        }
    }
}

impl From<&SeverityCounts> for DiagnosticCounts {
    fn from(value: &SeverityCounts) -> Self {
        DiagnosticCounts {
            info: value.info,
            warning: value.warning,
            error: value.error,
        }
    }
}

/// Summary of one pass. The diagnostics themselves live in the caller's collector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub entries_total: u32,
    pub entries_suppressed: u32,
    pub entries_emitted: u32,
    pub diagnostics_emitted: u32,
    pub log_lines_written: u32,
    /// Per-diagnostic severity counts (fanned-out instances each count).
    pub counts: SeverityCounts,
}
