use lockdiag_types::{KnownCode, LogCode};
use std::collections::BTreeSet;

/// Recognized restore log codes configured for escalation or suppression.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeSet(BTreeSet<KnownCode>);

impl CodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unrecognized codes are never members.
    pub fn contains(&self, code: &LogCode) -> bool {
        code.known().is_some_and(|known| self.0.contains(&known))
    }

    pub fn insert(&mut self, code: KnownCode) -> bool {
        self.0.insert(code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorted by code.
    pub fn iter(&self) -> impl Iterator<Item = KnownCode> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<KnownCode> for CodeSet {
    fn from_iter<I: IntoIterator<Item = KnownCode>>(iter: I) -> Self {
        CodeSet(iter.into_iter().collect())
    }
}

/// Parse a `,`/`;` separated code list (e.g. `"NU1101, NU1102;NU1103"`).
///
/// Best effort: tokens that are not known codes are dropped, and absent or blank input yields an
/// empty set. Never fails.
pub fn parse_code_set(raw: Option<&str>) -> CodeSet {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return CodeSet::new();
    };

    raw.split([',', ';'])
        .filter(|token| !token.is_empty())
        .filter_map(KnownCode::parse)
        .collect()
}
