use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Duplicating a roster could not complete.
///
/// The only path that produces this today is an allocation failure while
/// reserving storage for the copy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to clone roster of {len} name(s): {source}")]
pub struct CloneFailure {
    pub len: usize,
    #[source]
    pub source: TryReserveError,
}

/// Library-wide error type for roster operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration content is invalid.
    #[error("{0}")]
    Configuration(String),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Roster duplication failed.
    #[error(transparent)]
    Clone(#[from] CloneFailure),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserve_error() -> TryReserveError {
        Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err()
    }

    #[test]
    fn clone_failure_message_names_length() {
        let err = CloneFailure { len: 4, source: reserve_error() };
        assert!(err.to_string().starts_with("Failed to clone roster of 4 name(s)"));
    }

    #[test]
    fn clone_failure_converts_into_app_error() {
        let err: AppError = CloneFailure { len: 0, source: reserve_error() }.into();
        assert!(matches!(err, AppError::Clone(_)));
    }

    #[test]
    fn config_missing_names_path() {
        let err = AppError::ConfigMissing(PathBuf::from("nope.toml"));
        assert_eq!(err.to_string(), "Config file not found: nope.toml");
    }
}
