use anyhow::bail;

use crate::cli::subcommands::ServiceArgs;

/// Handle `bewell service create`.
pub fn handle(service: &ServiceArgs) -> anyhow::Result<std::process::ExitCode> {
    bail!(
        "bewell service create is not implemented yet (name={:?})",
        service.name
    )
}
