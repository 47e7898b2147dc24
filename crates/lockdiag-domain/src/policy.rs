#[cfg(test)]
use crate::codes::parse_code_set;
use crate::codes::CodeSet;
use lockdiag_types::LogCode;

/// Configuration for one pass. Built once, read-only during the pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub treat_warnings_as_errors: bool,
    /// Codes forced to `Error`.
    pub warn_as_error: CodeSet,
    /// Codes dropped entirely. Wins over `warn_as_error`.
    pub no_warn: CodeSet,
}

impl EffectiveConfig {
    /// Build from the raw `,`/`;` separated code lists.
    #[cfg(test)]
    pub(crate) fn from_raw(
        profile: &str,
        treat_warnings_as_errors: bool,
        warn_as_error: Option<&str>,
        no_warn: Option<&str>,
    ) -> Self {
        Self {
            profile: profile.to_string(),
            treat_warnings_as_errors,
            warn_as_error: parse_code_set(warn_as_error),
            no_warn: parse_code_set(no_warn),
        }
    }

    pub fn is_suppressed(&self, code: &LogCode) -> bool {
        self.no_warn.contains(code)
    }
}
