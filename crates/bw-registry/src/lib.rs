//! # bw-registry
//!
//! Schema registry HTTP client for bewell.
//!
//! Sends a [`SchemaPayload`] as a JSON POST and turns the registry's JSON
//! answer into an [`Outcome`]. One request per call: no retries, no
//! authentication, and a fixed 60 second timeout.

mod error;
mod http;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::RegistryError;

use std::time::Duration;

use bw_core::{Outcome, SchemaPayload};
use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

/// Client-side timeout for a registry request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("bewell/", env!("CARGO_PKG_VERSION"));

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the schema registry's validate and push endpoints.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
}

impl RegistryClient {
    /// Create a registry client with the fixed request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Client`] if the underlying `reqwest::Client`
    /// fails to build (e.g. the TLS backend cannot initialize).
    pub fn new() -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(RegistryError::Client)?;
        Ok(Self { http })
    }

    /// POST `payload` to `endpoint` and decode the registry's answer.
    ///
    /// The HTTP status is not inspected: `success` in the body decides the
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the payload cannot be encoded, the request
    /// fails or times out, or the response body is not a registry response.
    pub async fn submit(
        &self,
        payload: &SchemaPayload,
        endpoint: &Url,
    ) -> Result<Outcome, RegistryError> {
        let body = serde_json::to_vec(payload).map_err(RegistryError::Serialization)?;
        tracing::debug!(
            command = %http::curl_command(endpoint.as_str(), &body),
            "registry: sending request"
        );

        let resp = self
            .http
            .post(endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        http::read_outcome(resp).await
    }
}
