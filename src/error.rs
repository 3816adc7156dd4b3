use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for sentop
#[derive(Debug, Error)]
pub enum SentopError {
    /// Terminal initialization or operation failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Configuration parsing failed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file is invalid
    #[error("Invalid configuration file {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    /// Request could not be sent or the transport failed mid-flight
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The agent answered with a non-success HTTP status
    #[error("Agent returned HTTP {status} for {path}")]
    Api { path: String, status: u16 },

    /// The agent answered with a body that does not match the contract
    #[error("Malformed payload from {path}: {reason}")]
    Decode { path: String, reason: String },

    /// Invalid argument provided
    #[error("Invalid argument: {argument}")]
    InvalidArgument { argument: String },
}

impl SentopError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        SentopError::Config {
            message: message.into(),
        }
    }

    /// Create a config invalid error
    pub fn config_invalid(path: PathBuf, reason: impl Into<String>) -> Self {
        SentopError::ConfigInvalid {
            path,
            reason: reason.into(),
        }
    }

    /// Create an API status error
    pub fn api(path: impl Into<String>, status: u16) -> Self {
        SentopError::Api {
            path: path.into(),
            status,
        }
    }

    /// Create a payload decode error
    pub fn decode(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SentopError::Decode {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(argument: impl Into<String>) -> Self {
        SentopError::InvalidArgument {
            argument: argument.into(),
        }
    }
}

/// Result type alias for sentop operations
pub type Result<T> = std::result::Result<T, SentopError>;

impl From<toml::de::Error> for SentopError {
    fn from(err: toml::de::Error) -> Self {
        SentopError::Config {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SentopError {
    fn from(err: serde_json::Error) -> Self {
        SentopError::Decode {
            path: String::new(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SentopError::api("/api/stats", 502);
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("/api/stats"));
        assert!(matches!(err, SentopError::Api { .. }));
    }

    #[test]
    fn test_error_creation_helpers() {
        let err = SentopError::decode("/api/processes", "expected array");
        assert!(
            matches!(err, SentopError::Decode { path, reason } if path == "/api/processes" && reason == "expected array")
        );

        let err = SentopError::invalid_argument("--tick-ms");
        assert!(matches!(err, SentopError::InvalidArgument { argument } if argument == "--tick-ms"));
    }
}
