use std::fmt;
use std::process::ExitCode;

use bw_config::BewellConfig;
use bw_core::Outcome;
use bw_registry::RegistryClient;
use bw_service::{Operation, WorkflowError};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SchemaArgs, ServiceArgs};
use crate::commands::shared::settings::workflow_request;
use crate::output::output;

/// Result of a validate or push run, as shown to the operator.
#[derive(Debug, Serialize)]
struct SchemaStatusResponse {
    operation: String,
    service: String,
    version: String,
    valid: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip)]
    kind: Operation,
}

impl SchemaStatusResponse {
    fn new(
        operation: Operation,
        name: &str,
        version: &str,
        result: Result<Outcome, WorkflowError>,
    ) -> Self {
        let (valid, message, error) = match result {
            Ok(outcome) => (outcome.valid, outcome.message, None),
            Err(error) => (false, String::new(), Some(error.to_string())),
        };
        Self {
            operation: operation.to_string(),
            service: name.to_string(),
            version: version.to_string(),
            valid,
            message,
            error,
            kind: operation,
        }
    }

    fn exit_code(&self) -> ExitCode {
        if self.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

impl fmt::Display for SchemaStatusResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            service, version, ..
        } = self;

        if let Some(error) = &self.error {
            return match self.kind {
                Operation::Validate => write!(f, "error validating schema: {error}"),
                Operation::Publish => write!(f, "error pushing schema: {error}"),
            };
        }

        match (self.kind, self.valid) {
            (Operation::Validate, true) => {
                write!(f, "Schema for service {service} version {version} is valid")
            }
            (Operation::Publish, true) => write!(
                f,
                "Schema for service {service} version {version} successfully published"
            ),
            (Operation::Validate, false) => write!(
                f,
                "Schema for {service} version {version} is invalid\nMessage: {}",
                self.message
            ),
            (Operation::Publish, false) => write!(
                f,
                "Schema for {service} version {version} has not been published\nMessage: {}",
                self.message
            ),
        }
    }
}

/// Handle `bewell service validate-schema` and `bewell service push-schema`.
///
/// Workflow failures are reported on stdout like registry rejections; only
/// setup failures (e.g. the HTTP client) propagate as errors.
pub async fn handle(
    operation: Operation,
    service: &ServiceArgs,
    args: &SchemaArgs,
    config: &BewellConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    let request = workflow_request(service, args, config);
    let client = RegistryClient::new()?;

    let result = bw_service::run(&client, &request, operation).await;
    if let Err(error) = &result {
        tracing::debug!(%operation, ?error, "schema workflow failed");
    }

    let response = SchemaStatusResponse::new(
        operation,
        &request.service.name,
        &request.service.version,
        result,
    );
    output(&response, flags.format)?;
    Ok(response.exit_code())
}
