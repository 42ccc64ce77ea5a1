use std::process::ExitCode;

use bw_config::BewellConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &BewellConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Service { service, action } => {
            commands::service::handle(&service, &action, config, flags).await
        }
    }
}
