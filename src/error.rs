//! Error types shared by the dashboard library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort startup or a terminal session.
#[derive(Error, Debug)]
pub enum DashError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but could not be parsed
    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Could not determine a platform directory (config or data)
    #[error("Could not determine {0} directory")]
    NoPlatformDir(&'static str),

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashError::NoPlatformDir("data");
        assert_eq!(err.to_string(), "Could not determine data directory");

        let err = DashError::Logging("already set".to_string());
        assert_eq!(err.to_string(), "Logging setup failed: already set");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DashError = io_err.into();
        assert!(matches!(err, DashError::Io(_)));
    }
}
