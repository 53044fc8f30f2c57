//! Error types for the Nature Sounds client.

use nature_core::CoreError;
use thiserror::Error;

/// Errors that can occur when interacting with the Nature Sounds API.
#[derive(Error, Debug)]
pub enum ServerClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server answered with `success: 0`
    #[error("{0}")]
    Rejected(String),

    /// No stored credentials for an operation that needs them
    #[error("Login credentials not found")]
    AuthRequired,

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Form input rejected before sending
    #[error("{0}")]
    Validation(String),

    /// Credential store failure
    #[error("Credential storage error: {0}")]
    Storage(String),
}

impl From<CoreError> for ServerClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) | CoreError::InvalidInput(msg) => Self::Validation(msg),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl ServerClientError {
    /// Whether retrying the same request might succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ServerUnreachable(_))
    }

    /// Map a transport error, separating "could not reach the server"
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            Self::ServerUnreachable(e.to_string())
        } else {
            Self::Request(e)
        }
    }
}

/// Result type for server client operations.
pub type Result<T> = std::result::Result<T, ServerClientError>;
