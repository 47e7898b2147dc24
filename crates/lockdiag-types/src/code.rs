//! Restore log codes.
//!
//! A [`KnownCode`] is one of the codes in [`KNOWN_CODES`]; anything else read from an assets file
//! is kept verbatim as [`LogCode::Unrecognized`] so it can still be reported.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Every restore log code lockdiag recognizes, in canonical (upper-case) form.
pub const KNOWN_CODES: &[&str] = &[
    // Restore inputs and configuration
    "NU1000", "NU1001", "NU1002", "NU1003", "NU1004", "NU1005", "NU1006", "NU1007", "NU1008",
    "NU1009", "NU1010", "NU1011", "NU1012", "NU1013", "NU1014", "NU1015", "NU1016", "NU1017",
    "NU1018",
    // Dependency resolution
    "NU1100", "NU1101", "NU1102", "NU1103", "NU1104", "NU1105", "NU1106", "NU1107", "NU1108",
    "NU1109", "NU1110",
    // Compatibility
    "NU1201", "NU1202", "NU1203", "NU1204", "NU1211", "NU1212", "NU1213", "NU1214",
    // Feeds
    "NU1301", "NU1302", "NU1303", "NU1304",
    // Package integrity
    "NU1401", "NU1402", "NU1403",
    // Project configuration
    "NU1500", "NU1501", "NU1502", "NU1503", "NU1504", "NU1505", "NU1506", "NU1507", "NU1508",
    "NU1509", "NU1510", "NU1511",
    // Version selection
    "NU1601", "NU1602", "NU1603", "NU1604", "NU1605", "NU1606", "NU1607", "NU1608", "NU1609",
    // Framework fallback
    "NU1701", "NU1702", "NU1703",
    // Source availability
    "NU1801", "NU1802", "NU1803",
    // Vulnerability audit
    "NU1900", "NU1901", "NU1902", "NU1903", "NU1904", "NU1905",
    // Package signing
    "NU3000", "NU3001", "NU3002", "NU3003", "NU3004", "NU3005", "NU3006", "NU3007", "NU3008",
    "NU3009", "NU3010", "NU3011", "NU3012", "NU3013", "NU3014", "NU3015", "NU3016", "NU3017",
    "NU3018", "NU3019", "NU3020", "NU3021", "NU3022", "NU3023", "NU3024", "NU3025", "NU3026",
    "NU3027", "NU3028", "NU3029", "NU3030", "NU3031", "NU3032", "NU3033", "NU3034", "NU3035",
    "NU3036", "NU3037", "NU3038", "NU3039", "NU3040", "NU3041", "NU3042",
];

/// A recognized restore log code.
///
/// Only constructible through [`KnownCode::parse`], so the wrapped string is always an entry of
/// [`KNOWN_CODES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KnownCode(&'static str);

impl KnownCode {
    /// Match `token` (surrounding whitespace ignored) case-insensitively against the known codes.
    ///
    /// Total: anything that is not a known code returns `None`.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        KNOWN_CODES
            .iter()
            .copied()
            .find(|known| known.eq_ignore_ascii_case(token))
            .map(KnownCode)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Numeric family of the code, e.g. `11` for `NU1101`.
    pub fn family(&self) -> u8 {
        let digits = &self.0[2..4];
        digits.parse().unwrap_or(0)
    }
}

impl fmt::Display for KnownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for KnownCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// The code carried by a raw log entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogCode {
    Known(KnownCode),
    /// Literal text of a code lockdiag does not know. Never matches configured code sets.
    Unrecognized(String),
}

impl LogCode {
    pub fn parse(raw: &str) -> Self {
        match KnownCode::parse(raw) {
            Some(code) => LogCode::Known(code),
            None => LogCode::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LogCode::Known(code) => code.as_str(),
            LogCode::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn known(&self) -> Option<KnownCode> {
        match self {
            LogCode::Known(code) => Some(*code),
            LogCode::Unrecognized(_) => None,
        }
    }
}

impl From<KnownCode> for LogCode {
    fn from(value: KnownCode) -> Self {
        LogCode::Known(value)
    }
}

impl fmt::Display for LogCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LogCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(LogCode::parse(&raw))
    }
}
