//! Config parsing and profile resolution.
//!
//! No IO here: callers read `lockdiag.toml` and hand over the text.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::LockdiagConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `lockdiag.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<LockdiagConfigV1> {
    let cfg: LockdiagConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile, then file, then overrides).
pub fn resolve_config(
    cfg: LockdiagConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = parse_config_toml(
            r#"
schema = "lockdiag.config.v1"
profile = "strict"
treat_warnings_as_errors = false
warn_as_error = "NU1000;NU1002"
no_warn = "NU1100"
"#,
        )
        .expect("parse");

        assert_eq!(cfg.schema.as_deref(), Some("lockdiag.config.v1"));
        assert_eq!(cfg.profile.as_deref(), Some("strict"));
        assert_eq!(cfg.treat_warnings_as_errors, Some(false));
        assert_eq!(cfg.warn_as_error.as_deref(), Some("NU1000;NU1002"));
        assert_eq!(cfg.no_warn.as_deref(), Some("NU1100"));
    }

    #[test]
    fn empty_config_is_valid() {
        let cfg = parse_config_toml("").expect("parse");
        assert_eq!(cfg, LockdiagConfigV1::default());
    }

    #[test]
    fn toml_syntax_errors_are_errors() {
        assert!(parse_config_toml("warn_as_error = ").is_err());
        assert!(parse_config_toml("treat_warnings_as_errors = \"yes\"").is_err());
    }
}
