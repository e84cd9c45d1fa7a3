use crate::{ConfigError, ConfigResult, SetupSettings};
use std::env;
use std::path::PathBuf;

pub const ENV_REGISTRY_URL: &str = "CHAINSETUP_REGISTRY_URL";
pub const ENV_PROBE_TIMEOUT_MS: &str = "CHAINSETUP_PROBE_TIMEOUT_MS";
pub const ENV_DEPLOY_ROOT: &str = "CHAINSETUP_DEPLOY_ROOT";
pub const ENV_LOG_LEVEL: &str = "CHAINSETUP_LOG_LEVEL";

/// Environment variable-based settings overrides
pub struct EnvLoader;

impl EnvLoader {
    /// Apply any `CHAINSETUP_*` variables present in the environment
    pub fn apply_overrides(settings: &mut SetupSettings) -> ConfigResult<()> {
        Self::apply_overrides_from(settings, |key| env::var(key).ok())
    }

    /// Same as [`EnvLoader::apply_overrides`] with an explicit variable source
    pub fn apply_overrides_from<F>(settings: &mut SetupSettings, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_REGISTRY_URL) {
            settings.registry_url = url;
        }

        if let Some(timeout) = lookup(ENV_PROBE_TIMEOUT_MS) {
            settings.probe_timeout_ms = timeout.trim().parse().map_err(|_| {
                ConfigError::EnvironmentError(format!("Invalid {}: {}", ENV_PROBE_TIMEOUT_MS, timeout))
            })?;
        }

        if let Some(root) = lookup(ENV_DEPLOY_ROOT) {
            settings.deploy_root = PathBuf::from(root);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            settings.log_level = level;
        }

        Ok(())
    }
}
