// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types
//!
//! Only programming mistakes surface as `Err` from the client: sending on an
//! unconfigured client, or an invalid proxy at configure time. Failures that
//! originate at the network boundary are captured into the response object
//! instead (see [`Response::error`](crate::Response)).

use thiserror::Error;

/// Result type alias for evaste operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport construction failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Client misconfiguration or misuse
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = Error::config("client not configured");
        assert!(err.is_config());
        assert_eq!(err.to_string(), "Configuration error: client not configured");
    }

    #[test]
    fn test_url_error_conversion() {
        let err: Error = url::ParseError::EmptyHost.into();
        assert!(matches!(err, Error::Url(_)));
        assert!(err.to_string().starts_with("Invalid URL:"));
    }

    #[test]
    fn test_string_conversion() {
        let err: Error = "boom".into();
        assert_eq!(err.to_string(), "boom");
    }
}
