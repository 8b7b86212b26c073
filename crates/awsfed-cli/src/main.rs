//! # awsfed
//!
//! Applies AWS IAM SAML attribute mapping from the command line.

#![forbid(unsafe_code)]

use awsfed_cli::{
    cli::{Cli, Command},
    commands::{run_apply, run_check},
    output::error,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Command::Apply(args) => run_apply(args, &cli.config, cli.output),
        Command::Check => run_check(&cli.config, cli.output),
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(1);
    }
}
