//! Stable identifiers that are not restore log codes.

// Tool-level
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

// Config
pub const SCHEMA_CONFIG_V1: &str = "lockdiag.config.v1";

// Profiles
pub const PROFILE_DEFAULT: &str = "default";
pub const PROFILE_STRICT: &str = "strict";
