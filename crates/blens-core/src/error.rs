//! Centralized error types for Biblical Lens.

use thiserror::Error;

/// Main error type for credential and analysis operations.
///
/// Every variant carries a message fit to show the user directly; the CLI
/// surfaces them verbatim and never retries on its own.
#[derive(Error, Debug)]
pub enum LensError {
    #[error("No API key configured")]
    MissingCredential,

    #[error("Content description is empty")]
    EmptyInput,

    #[error("Invalid API key. Please check your Anthropic API key.")]
    InvalidCredential,

    #[error("{0}")]
    Provider(String),

    #[error("Malformed response from Claude API: {0}")]
    MalformedResponse(String),

    #[error("Invalid rating in response: {0:?}")]
    InvalidRating(String),

    #[error("Incomplete response from Claude API: empty {0}")]
    IncompleteResponse(&'static str),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Biblical Lens operations.
pub type LensResult<T> = Result<T, LensError>;

impl LensError {
    /// Create a malformed-response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}
