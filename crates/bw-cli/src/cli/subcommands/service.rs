use clap::{Args, Subcommand};

/// Service descriptor flags, shared by every `service` subcommand.
///
/// Unset flags fall back to the `[service]` config section.
#[derive(Clone, Debug, Default, Args)]
pub struct ServiceArgs {
    /// The name of a service
    #[arg(short, long, global = true)]
    pub name: Option<String>,
    /// The domain url for the service
    #[arg(short, long, global = true)]
    pub url: Option<String>,
    /// Version of a service
    #[arg(short = 'v', long = "version", global = true)]
    pub service_version: Option<String>,
}

/// Schema discovery and registry flags for `validate-schema` and `push-schema`.
///
/// Unset flags fall back to the `[schema]` and `[registry]` config sections.
#[derive(Clone, Debug, Default, Args)]
pub struct SchemaArgs {
    /// The directory containing the graphql schema files [default: .]
    #[arg(long)]
    pub dir: Option<String>,
    /// The extension for graphql schema files in directory [default: graphql]
    #[arg(long)]
    pub file_extension: Option<String>,
    /// The schema registry url
    #[arg(long)]
    pub registry_url: Option<String>,
    /// Only pick up files whose name ends with the extension
    #[arg(long)]
    pub strict_extension: bool,
}

/// Work with bewell microservices.
#[derive(Clone, Debug, Subcommand)]
pub enum ServiceCommands {
    /// Validate a service's schema with the gateway.
    ValidateSchema(SchemaArgs),
    /// Create or update the registered schema for a service.
    PushSchema(SchemaArgs),
    /// Create a bewell microservice with boilerplate.
    #[command(hide = true)]
    Create,
}
