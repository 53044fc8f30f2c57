/// Core error types for Nature Sounds
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Nature Sounds
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid input (malformed identifiers, out-of-range values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A form failed validation; the message is user-facing
    #[error("{0}")]
    Validation(String),

    /// Credential store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Audio output errors
    #[error("Audio error: {0}")]
    Audio(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }
}
