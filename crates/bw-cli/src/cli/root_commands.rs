use clap::Subcommand;

use crate::cli::subcommands::{ServiceArgs, ServiceCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Service deals with bewell microservices.
    Service {
        #[command(flatten)]
        service: ServiceArgs,
        #[command(subcommand)]
        action: ServiceCommands,
    },
}
