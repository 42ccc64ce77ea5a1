//! Request body for schema validation and publication.

use serde::{Deserialize, Serialize};

use crate::service::ServiceDescriptor;

/// Payload sent to `schema/validate` and `schema/push`.
///
/// Field names are the wire names; key order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaPayload {
    pub name: String,
    pub url: String,
    pub version: String,
    /// The full concatenated schema document.
    pub type_defs: String,
}

impl SchemaPayload {
    /// Combine a service descriptor with its aggregated schema text.
    #[must_use]
    pub fn new(service: &ServiceDescriptor, type_defs: String) -> Self {
        Self {
            name: service.name.clone(),
            url: service.url.clone(),
            version: service.version.clone(),
            type_defs,
        }
    }
}
