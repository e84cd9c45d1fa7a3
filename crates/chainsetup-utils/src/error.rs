use thiserror::Error;

/// Error type used across the configuration workflow
#[derive(Error, Debug)]
pub enum SetupError {
    /// Persisted configuration or settings problems
    #[error("Configuration error: {0}")]
    Config(String),

    /// The interactive surface could not produce an answer
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// The operator's input stream ended
    #[error("Input closed")]
    InputClosed,

    /// Filesystem or terminal IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input or state
    #[error("Invalid: {0}")]
    Invalid(String),
}

/// Standard Result type used across chainsetup
pub type SetupResult<T> = Result<T, SetupError>;

#[macro_export]
macro_rules! prompt_error {
    ($msg:expr) => {
        $crate::error::SetupError::Prompt($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::SetupError::Prompt(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_macros() {
        let err = prompt_error!("input closed for {}", "ethereum");
        assert!(matches!(err, SetupError::Prompt(ref m) if m == "input closed for ethereum"));

        let err = prompt_error!("input closed");
        assert_eq!(err.to_string(), "Prompt error: input closed");
    }
}
