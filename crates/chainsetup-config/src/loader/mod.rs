//! Settings loading and environment handling

pub mod env;
pub mod file;

pub use env::EnvLoader;
pub use file::FileLoader;

use crate::{ConfigResult, SetupSettings};
use std::path::Path;

/// Layers settings from defaults, an optional file and the environment
#[derive(Debug, Default)]
pub struct SettingsLoader;

impl SettingsLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load with precedence: env vars > settings file > defaults.
    ///
    /// CLI flags are applied by the caller on top of the returned value and
    /// must be followed by another `validate()`.
    pub async fn load<P: AsRef<Path>>(&self, settings_path: Option<P>) -> ConfigResult<SetupSettings> {
        let mut settings = match settings_path {
            Some(path) => FileLoader::load_settings(path).await?,
            None => SetupSettings::default(),
        };

        EnvLoader::apply_overrides(&mut settings)?;
        settings.validate()?;
        Ok(settings)
    }
}
