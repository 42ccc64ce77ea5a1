//! # bw-service
//!
//! Schema validate and publish workflows for bewell.
//!
//! Both workflows run the same steps and stop at the first failure:
//!
//! 1. check the [`ServiceDescriptor`] is complete (before any I/O)
//! 2. aggregate the schema fragments under the source directory
//! 3. build the [`SchemaPayload`]
//! 4. derive the endpoint from the registry base URL
//! 5. submit through the [`RegistryClient`]
//!
//! They differ only in the endpoint path (`schema/validate` or `schema/push`).

mod error;
mod operation;

pub use error::WorkflowError;
pub use operation::{Operation, endpoint};

use std::path::PathBuf;

use bw_core::{Outcome, SchemaPayload, ServiceDescriptor};
use bw_registry::RegistryClient;
use bw_schema::ExtensionMatch;

/// Where schema fragments are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSource {
    pub dir: PathBuf,
    /// Extension of schema files, with or without the leading dot.
    pub extension: String,
    pub matching: ExtensionMatch,
}

/// Everything one workflow run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowRequest {
    pub service: ServiceDescriptor,
    pub source: SchemaSource,
    /// Base URL of the registry; its path is replaced by the operation's.
    pub registry_url: String,
}

/// Validate the service's schema with the registry.
///
/// # Errors
///
/// Returns the first [`WorkflowError`] encountered. A registry rejection is
/// an `Ok` outcome with `valid == false`.
pub async fn validate(
    client: &RegistryClient,
    request: &WorkflowRequest,
) -> Result<Outcome, WorkflowError> {
    run(client, request, Operation::Validate).await
}

/// Create or update the registered schema for the service.
///
/// # Errors
///
/// Returns the first [`WorkflowError`] encountered. A registry rejection is
/// an `Ok` outcome with `valid == false`.
pub async fn publish(
    client: &RegistryClient,
    request: &WorkflowRequest,
) -> Result<Outcome, WorkflowError> {
    run(client, request, Operation::Publish).await
}

/// Run `operation` for `request`.
///
/// # Errors
///
/// See [`validate`] and [`publish`].
pub async fn run(
    client: &RegistryClient,
    request: &WorkflowRequest,
    operation: Operation,
) -> Result<Outcome, WorkflowError> {
    let WorkflowRequest {
        service,
        source,
        registry_url,
    } = request;

    service.validate_fields()?;

    let document = bw_schema::aggregate(&source.dir, &source.extension, source.matching)?;
    let payload = SchemaPayload::new(service, document.into_type_defs());

    let url = endpoint(registry_url, operation)?;
    tracing::info!(%operation, service = %service.name, version = %service.version, %url, "submitting schema");

    let outcome = client.submit(&payload, &url).await?;
    tracing::debug!(%operation, valid = outcome.valid, "registry outcome");
    Ok(outcome)
}
