//! Shared HTTP helpers for the registry client.
//!
//! The registry signals success in the JSON body, so the status code of a
//! response is logged but never turned into an error here.

use bw_core::{Outcome, RegistryResponse};

use crate::error::RegistryError;

/// Maximum number of body bytes kept in a [`RegistryError::ResponseDecode`].
const BODY_EXCERPT_LEN: usize = 512;

/// Read the full response body and decode it into an [`Outcome`].
///
/// # Errors
///
/// - [`RegistryError::Transport`] if the body cannot be read.
/// - [`RegistryError::ResponseDecode`] if the body is not a registry response.
pub async fn read_outcome(resp: reqwest::Response) -> Result<Outcome, RegistryError> {
    let status = resp.status();
    let body = resp.bytes().await?;
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "registry: response received");

    let response: RegistryResponse =
        serde_json::from_slice(&body).map_err(|source| RegistryError::ResponseDecode {
            status: status.as_u16(),
            body: excerpt(&body),
            source,
        })?;

    if !response.success {
        for detail in &response.details {
            tracing::info!(detail = %detail.message, "registry: failure detail");
        }
    }

    Ok(Outcome::from(response))
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.into_owned(),
    }
}

/// Render a JSON POST as an equivalent `curl` command line, for debug logs.
pub fn curl_command(url: &str, body: &[u8]) -> String {
    format!(
        "curl -X 'POST' -d {} -H 'Accept: application/json' -H 'Content-Type: application/json' {}",
        shell_quote(&String::from_utf8_lossy(body)),
        shell_quote(url),
    )
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
