//! Error types for Spaces Explorer.
//!
//! Remote failures (transport, HTTP status, undecodable payloads) form one
//! class that the explorer propagates untouched. Local failures cover input
//! validation and configuration.

use thiserror::Error;

/// Main error type for the Spaces Explorer library.
#[derive(Debug, Error)]
pub enum SpacesError {
    // Remote errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request timed out: {message}")]
    Timeout { message: String },

    #[error("Rate limited by {service}, retry after {retry_after_secs:?} seconds")]
    RateLimited {
        service: String,
        retry_after_secs: Option<u64>,
    },

    #[error("Unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Catalog API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Local errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for Spaces Explorer operations.
pub type Result<T> = std::result::Result<T, SpacesError>;

impl From<serde_json::Error> for SpacesError {
    fn from(err: serde_json::Error) -> Self {
        SpacesError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for SpacesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SpacesError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            SpacesError::Json {
                message: err.to_string(),
                source: None,
            }
        } else {
            SpacesError::Network {
                message: err.to_string(),
                cause: Some(err.to_string()),
            }
        }
    }
}

impl SpacesError {
    /// Create a validation error for a named input field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SpacesError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from the remote catalog call.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            SpacesError::Network { .. }
                | SpacesError::Timeout { .. }
                | SpacesError::RateLimited { .. }
                | SpacesError::Unauthorized { .. }
                | SpacesError::Api { .. }
                | SpacesError::Json { .. }
        )
    }

    /// Process exit code for the CLI.
    ///
    /// - 2: invalid input or configuration
    /// - 3: remote catalog failure
    pub fn exit_code(&self) -> i32 {
        if self.is_remote() {
            3
        } else {
            2
        }
    }
}
