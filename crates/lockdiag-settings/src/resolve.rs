use crate::{model::LockdiagConfigV1, presets};
use lockdiag_domain::{codes::parse_code_set, policy::EffectiveConfig};
use lockdiag_types::ids::{PROFILE_DEFAULT, SCHEMA_CONFIG_V1};

/// Command-line values. Each one that is set replaces the config file's value.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub treat_warnings_as_errors: Option<bool>,
    pub warn_as_error: Option<String>,
    pub no_warn: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: LockdiagConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .or(cfg.profile)
        .unwrap_or_else(|| PROFILE_DEFAULT.to_string());

    let mut effective = presets::preset(&profile);

    if let Some(flag) = overrides
        .treat_warnings_as_errors
        .or(cfg.treat_warnings_as_errors)
    {
        effective.treat_warnings_as_errors = flag;
    }

    let warn_as_error = overrides.warn_as_error.or(cfg.warn_as_error);
    let no_warn = overrides.no_warn.or(cfg.no_warn);
    effective.warn_as_error = parse_code_set(warn_as_error.as_deref());
    effective.no_warn = parse_code_set(no_warn.as_deref());

    Ok(ResolvedConfig { effective })
}
