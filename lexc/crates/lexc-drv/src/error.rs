//! Error handling for the lexc driver.
//!
//! Lexical problems in the input are not errors here; they are diagnostics.
//! These variants cover everything around the scan itself.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the lexc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Input {
        /// The input that failed.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The output destination could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Output {
        /// The destination that failed.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Strict mode saw lexical diagnostics.
    #[error("{errors} lexical error(s) reported")]
    Lexical {
        /// Number of error diagnostics.
        errors: usize,
    },
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("bad key".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad key");
    }

    #[test]
    fn test_input_error_display() {
        let err = DriverError::Input {
            path: PathBuf::from("program.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read program.txt: not found");
    }

    #[test]
    fn test_lexical_error_display() {
        let err = DriverError::Lexical { errors: 2 };
        assert_eq!(err.to_string(), "2 lexical error(s) reported");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::Other, "broken");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Io(_)));
    }
}
