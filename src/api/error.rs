//! Errors produced by the item endpoint client.

use thiserror::Error;

/// Errors that can occur while fetching items.
///
/// Decode problems are not represented here: an empty or malformed body is
/// treated as an empty list by [`decode_items`](super::decode_items).
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built from the configuration.
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Connection, TLS, timeout or body read failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status {status} from '{url}'")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// Short message for the status line.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Client { .. } => "HTTP client unavailable".to_string(),
            FetchError::Transport { source, .. } if source.is_timeout() => {
                "Request timed out".to_string()
            }
            FetchError::Transport { .. } => "Could not reach server".to_string(),
            FetchError::Status { status, .. } => format!("Server returned {status}"),
        }
    }
}
