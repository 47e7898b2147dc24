use lockdiag_domain::policy::EffectiveConfig;
use lockdiag_types::ids::{PROFILE_DEFAULT, PROFILE_STRICT};

/// Baseline for a profile name. Unknown names get the default profile.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        PROFILE_STRICT => strict_profile(),
        _ => default_profile(),
    }
}

fn default_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: PROFILE_DEFAULT.to_string(),
        ..EffectiveConfig::default()
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: PROFILE_STRICT.to_string(),
        treat_warnings_as_errors: true,
        ..EffectiveConfig::default()
    }
}
