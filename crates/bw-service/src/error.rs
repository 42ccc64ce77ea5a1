//! Workflow error type.
//!
//! Every crate keeps its own error enum; they converge here so the CLI has a
//! single type to report.

use bw_core::ServiceError;
use bw_registry::RegistryError;
use bw_schema::SchemaError;

/// First failure of a validate or publish run.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// The service descriptor is missing name, url or version.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Schema files could not be aggregated.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The registry base URL cannot be used.
    #[error("invalid registry url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The registry request failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
