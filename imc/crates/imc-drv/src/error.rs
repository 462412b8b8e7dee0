//! Error handling module for the imc driver.

use imc_lex::LexError;
use thiserror::Error;

/// Main error type for the imc driver.
#[derive(Error, Debug)]
pub enum DrvError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The source could not be opened or read.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Writing the token dump failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a token to JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_display() {
        let err = DrvError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_lex_error_is_transparent() {
        let lex = LexError::Init {
            source: io::Error::new(io::ErrorKind::InvalidData, "bad header"),
        };
        let err: DrvError = lex.into();
        assert_eq!(err.to_string(), "failed to read first line: bad header");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DrvError = io_err.into();
        assert!(matches!(err, DrvError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DrvError = json_err.into();
        assert!(matches!(err, DrvError::Json(_)));
    }
}
