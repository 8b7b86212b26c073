//! # awsfed-cli
//!
//! Command-line runner for the AWS SAML attribute step.
//!
//! Loads a filter configuration file, applies the step to an attribute
//! document and prints the augmented attributes. Useful for checking a
//! role map before deploying it into an identity provider.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, CliResult};
