//! Schema registry endpoint configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Base URL of the schema registry (e.g., `https://registry.example/`).
    /// The `schema/validate` and `schema/push` paths replace its path.
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub url: String,
}

impl RegistryConfig {
    /// Check if a registry URL has been provided.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}
