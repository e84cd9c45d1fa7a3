//! Persisted per-class connection file

use crate::{ConfigError, ConfigResult, ConnectionMap};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Loads and saves one connection file.
///
/// The store never merges: `save` replaces the file with exactly the mapping
/// it is given. Entries are opaque JSON, so whatever was loaded is saved
/// back unchanged.
#[derive(Debug, Clone)]
pub struct ConnectionStore {
    path: PathBuf,
}

impl ConnectionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Parsed contents of the file, or an empty mapping when it does not exist.
    ///
    /// A file that exists but does not parse is an error.
    pub async fn load(&self) -> ConfigResult<ConnectionMap> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No existing connection file");
                return Ok(ConnectionMap::new());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        let mapping: ConnectionMap =
            serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
                path: self.path.display().to_string(),
                source,
            })?;

        debug!(path = %self.path.display(), entries = mapping.len(), "Loaded connection file");
        Ok(mapping)
    }

    /// Write the whole mapping, pretty-printed, replacing the previous file.
    ///
    /// Content goes to a sibling temp file first and is renamed into place.
    pub async fn save(&self, mapping: &ConnectionMap) -> ConfigResult<()> {
        let mut content = serde_json::to_string_pretty(mapping)?;
        content.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).await?;
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(ConfigError::Io(e));
        }

        debug!(path = %self.path.display(), entries = mapping.len(), "Saved connection file");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
