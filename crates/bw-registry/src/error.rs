//! Registry error types.

use thiserror::Error;

/// Errors that can occur when talking to the schema registry.
///
/// A registry answer with `success: false` is not an error; it becomes an
/// [`Outcome`](bw_core::Outcome) with `valid == false`.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The payload could not be encoded as JSON.
    #[error("failed to serialize payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Connection failure, timeout, or an interrupted response body.
    #[error("failed to make registry http request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not a JSON registry response.
    #[error("failed to decode registry response (HTTP {status}): {source}; body: {body}")]
    ResponseDecode {
        /// HTTP status code of the response, for diagnostics only.
        status: u16,
        /// Leading part of the response body.
        body: String,
        #[source]
        source: serde_json::Error,
    },
}
