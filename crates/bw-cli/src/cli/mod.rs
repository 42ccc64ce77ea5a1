use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `bewell` binary.
#[derive(Debug, Parser)]
#[command(name = "bewell", version, about = "bewell CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging, including the registry request as curl)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above .bewell/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::ServiceCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn service_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "bewell",
            "service",
            "-n",
            "bewell",
            "-u",
            "https://bewell-test.com",
            "-v",
            "0.0.1",
            "validate-schema",
            "--registry-url",
            "https://registry.example/",
        ])
        .expect("cli should parse");

        let Commands::Service { service, action } = cli.command;
        assert_eq!(service.name.as_deref(), Some("bewell"));
        assert_eq!(service.url.as_deref(), Some("https://bewell-test.com"));
        assert_eq!(service.service_version.as_deref(), Some("0.0.1"));
        let ServiceCommands::ValidateSchema(args) = action else {
            panic!("expected validate-schema");
        };
        assert_eq!(args.registry_url.as_deref(), Some("https://registry.example/"));
        assert!(args.dir.is_none());
        assert!(!args.strict_extension);
    }

    #[test]
    fn service_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bewell",
            "service",
            "push-schema",
            "--name",
            "bewell",
            "--version",
            "0.0.2",
            "--dir",
            "graph",
            "--file-extension",
            "gql",
            "--strict-extension",
        ])
        .expect("cli should parse");

        let Commands::Service { service, action } = cli.command;
        assert_eq!(service.name.as_deref(), Some("bewell"));
        assert_eq!(service.service_version.as_deref(), Some("0.0.2"));
        let ServiceCommands::PushSchema(args) = action else {
            panic!("expected push-schema");
        };
        assert_eq!(args.dir.as_deref(), Some("graph"));
        assert_eq!(args.file_extension.as_deref(), Some("gql"));
        assert!(args.strict_extension);
    }

    #[test]
    fn global_flags_parse_anywhere() {
        let cli = Cli::try_parse_from([
            "bewell",
            "--format",
            "json",
            "service",
            "validate-schema",
            "--quiet",
            "--config",
            "ci.toml",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert_eq!(cli.global_flags().config.as_deref(), Some("ci.toml"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["bewell", "--format", "xml", "service", "validate-schema"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn create_is_hidden_but_parses() {
        let cli = Cli::try_parse_from(["bewell", "service", "create"]).expect("cli should parse");
        let Commands::Service { action, .. } = cli.command;
        assert!(matches!(action, ServiceCommands::Create));

        let help = Cli::command()
            .find_subcommand_mut("service")
            .expect("service command exists")
            .render_help()
            .to_string();
        assert!(help.contains("validate-schema"));
        assert!(!help.lines().any(|line| line.trim_start().starts_with("create")));
    }
}
