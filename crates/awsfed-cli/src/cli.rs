//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Applies AWS IAM SAML attribute mapping to a set of user attributes.
#[derive(Debug, Parser)]
#[command(name = "awsfed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Filter configuration file (.json, otherwise TOML).
    #[arg(short, long, env = "AWSFED_CONFIG")]
    pub config: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply the filter to an attribute document.
    Apply(ApplyArgs),

    /// Validate the filter configuration and print a summary.
    Check,
}

/// Arguments for `apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON file with the user's attributes (reads stdin when omitted).
    ///
    /// Values may be strings or lists of strings.
    #[arg(short, long)]
    pub attributes: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_apply() {
        let cli = Cli::try_parse_from([
            "awsfed",
            "--config",
            "filter.toml",
            "--output",
            "json",
            "apply",
            "--attributes",
            "user.json",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("filter.toml"));
        assert!(matches!(cli.output, OutputFormat::Json));
        match cli.command {
            Command::Apply(args) => {
                assert_eq!(args.attributes, Some(PathBuf::from("user.json")));
            }
            Command::Check => panic!("expected apply"),
        }
    }
}
