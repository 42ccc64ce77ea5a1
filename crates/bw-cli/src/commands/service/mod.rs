use std::process::ExitCode;

use bw_config::BewellConfig;
use bw_service::Operation;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ServiceArgs, ServiceCommands};

mod create;
mod schema;

/// Route a `bewell service` subcommand.
pub async fn handle(
    service: &ServiceArgs,
    action: &ServiceCommands,
    config: &BewellConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    match action {
        ServiceCommands::ValidateSchema(args) => {
            schema::handle(Operation::Validate, service, args, config, flags).await
        }
        ServiceCommands::PushSchema(args) => {
            schema::handle(Operation::Publish, service, args, config, flags).await
        }
        ServiceCommands::Create => create::handle(service),
    }
}
