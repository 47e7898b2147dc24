use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `lockdiag.toml` schema v1.
///
/// Every field is optional; absent fields fall through to the profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LockdiagConfigV1 {
    /// Optional schema string for tooling (`lockdiag.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `default` or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treat_warnings_as_errors: Option<bool>,

    /// Codes escalated to error, separated by `,` or `;`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warn_as_error: Option<String>,

    /// Codes suppressed entirely, separated by `,` or `;`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_warn: Option<String>,
}
