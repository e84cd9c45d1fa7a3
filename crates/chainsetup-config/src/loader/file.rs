use crate::{ConfigError, ConfigResult, NetworkDescriptor, NetworkRegistry, SetupSettings};
use std::path::Path;
use tokio::fs;

/// File-based loaders for settings and network lists
pub struct FileLoader;

impl FileLoader {
    /// Load settings from a TOML file; missing keys fall back to defaults
    pub async fn load_settings<P: AsRef<Path>>(path: P) -> ConfigResult<SetupSettings> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).await?;
        let settings: SetupSettings = toml::from_str(&content)?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load a JSON array of network descriptors replacing the built-in list
    pub async fn load_networks<P: AsRef<Path>>(path: P) -> ConfigResult<NetworkRegistry> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).await?;
        let networks: Vec<NetworkDescriptor> =
            serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
                path: path.display().to_string(),
                source,
            })?;

        if networks.iter().any(|n| n.id.trim().is_empty() || n.name.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed(format!(
                "{}: every network needs a non-empty id and name",
                path.display()
            )));
        }

        Ok(NetworkRegistry::new(networks))
    }
}
