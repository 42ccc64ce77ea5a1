//! Merge command-line flags over the loaded configuration.

use std::path::PathBuf;

use bw_config::BewellConfig;
use bw_core::ServiceDescriptor;
use bw_schema::ExtensionMatch;
use bw_service::{SchemaSource, WorkflowRequest};

use crate::cli::subcommands::{SchemaArgs, ServiceArgs};

/// Build the workflow request: a flag wins over its config value.
pub fn workflow_request(
    service: &ServiceArgs,
    schema: &SchemaArgs,
    config: &BewellConfig,
) -> WorkflowRequest {
    let pick = |flag: Option<&str>, configured: &str| flag.unwrap_or(configured).to_string();

    WorkflowRequest {
        service: ServiceDescriptor::new(
            pick(service.name.as_deref(), &config.service.name),
            pick(service.url.as_deref(), &config.service.url),
            pick(service.service_version.as_deref(), &config.service.version),
        ),
        source: SchemaSource {
            dir: PathBuf::from(pick(schema.dir.as_deref(), &config.schema.dir)),
            extension: pick(schema.file_extension.as_deref(), &config.schema.file_extension),
            matching: ExtensionMatch::from_strict(
                schema.strict_extension || config.schema.strict_extension,
            ),
        },
        registry_url: pick(schema.registry_url.as_deref(), &config.registry.url),
    }
}
