//! Tool settings

use crate::{ConfigError, ConfigResult, NetworkClass};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default registry document for a chain id
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/ethereum-lists/chains/master/_data/chains/eip155-{id}.json";

/// Budget for a single liveness probe
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 10_000;

/// Placeholder replaced by the network id in `registry_url`
pub const REGISTRY_ID_PLACEHOLDER: &str = "{id}";

/// Settings driving a configuration run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupSettings {
    /// Registry URL template, `{id}` is replaced by the network id
    pub registry_url: String,

    /// Time budget for each probe in milliseconds
    pub probe_timeout_ms: u64,

    /// Directory the per-class connection files live in
    pub deploy_root: PathBuf,

    /// Log filter (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for SetupSettings {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            deploy_root: PathBuf::from("."),
            log_level: "info".to_string(),
        }
    }
}

impl SetupSettings {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Persisted connection file for a network class
    pub fn config_path(&self, class: NetworkClass) -> PathBuf {
        self.deploy_root.join(class.config_file_name())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.registry_url.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "registry_url cannot be empty".to_string(),
            ));
        }

        if !self.registry_url.contains(REGISTRY_ID_PLACEHOLDER) {
            return Err(ConfigError::ValidationFailed(format!(
                "registry_url must contain the {} placeholder",
                REGISTRY_ID_PLACEHOLDER
            )));
        }

        if self.probe_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "probe_timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "log_level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
