use chainsetup_utils::SetupError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Malformed configuration file {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Environment error: {0}")]
    EnvironmentError(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid network class: {0}")]
    InvalidNetwork(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(e) => SetupError::Io(e),
            other => SetupError::Config(other.to_string()),
        }
    }
}
