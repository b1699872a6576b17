//! CLI commands.

mod check;
mod image;
mod instance;
mod sanitize;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// fname - Build friendly workload names and check DNS name syntax.
#[derive(Debug, Parser)]
#[command(name = "fname")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format. Defaults to the config file value, then `table`.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Config file path.
    #[arg(long, global = true, env = "FNAME_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a friendly name from an image tag and image hash.
    Image(image::ImageCommand),

    /// Build a friendly name from a namespace, kind, name and hashed ID.
    Instance(instance::InstanceCommand),

    /// Replace characters that are illegal in DNS names.
    Sanitize(sanitize::SanitizeCommand),

    /// Check names against DNS subdomain or DNS label rules.
    Check(check::CheckCommand),
}

impl Cli {
    /// Config file path given on the command line or in the environment.
    pub fn config_path(&self) -> Option<&std::path::Path> {
        self.config.as_deref()
    }

    /// Whether logs should be emitted as JSON.
    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            format: self.format.unwrap_or(config.format),
        };

        match self.command {
            Commands::Image(cmd) => cmd.run(ctx),
            Commands::Instance(cmd) => cmd.run(ctx),
            Commands::Sanitize(cmd) => cmd.run(ctx),
            Commands::Check(cmd) => cmd.run(ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_flag_overrides_config() {
        let cli = Cli::try_parse_from(["fname", "--format", "json", "sanitize", "nginx"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_format_falls_back_to_none() {
        let cli = Cli::try_parse_from(["fname", "sanitize", "nginx"]).unwrap();
        assert_eq!(cli.format, None);
        assert!(!cli.log_json());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["fname", "--format", "yaml", "sanitize", "x"]).is_err());
    }

    #[test]
    fn test_instance_args_parse() {
        let cli = Cli::try_parse_from([
            "fname",
            "instance",
            "--namespace",
            "default",
            "--kind",
            "Pod",
            "--name",
            "reverse-proxy",
            "1ba506b28f9ee9c7",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Instance(_)));
    }
}
