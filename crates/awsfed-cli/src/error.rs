//! CLI error types.

use awsfed_aws::ConfigError;
use awsfed_spi::StepError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filter configuration was rejected.
    #[error("invalid filter configuration: {0}")]
    Filter(#[from] ConfigError),

    /// Processing step failed.
    #[error("processing failed: {0}")]
    Step(#[from] StepError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
