//! Error types for the element model.
//!
//! Setters fail immediately with [`Error::InvalidArgument`]. Incomplete
//! elements are not errors in this sense: they are reported by a validation
//! pass as [`ValidationErrors`](crate::elements::ValidationErrors).

/// Result type alias for element operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or serializing elements.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A setter received a value outside its allowed range or value set
    #[error("{0}")]
    InvalidArgument(String),

    /// Payload could not be encoded or an element description could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}
