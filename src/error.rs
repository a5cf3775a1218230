//! Error types shared by the remote-model and listing clients.

use thiserror::Error;

/// Errors that can occur when talking to a remote endpoint.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint rejected the request or answered with an unusable body.
    #[error("{message}")]
    Api {
        /// Error message
        message: String,
    },

    /// Error occurred during an HTTP request.
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Error occurred when accessing environment variables.
    #[error("Environment variable not found: {0}")]
    Env(#[from] std::env::VarError),

    /// Error occurred when parsing JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred when reading an image from disk.
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new Api error with the given message.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }
}
