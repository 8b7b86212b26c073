//! Loading filter configuration and attribute documents.

use std::io::Read;
use std::path::Path;

use awsfed_aws::RoleMappingConfig;
use awsfed_spi::Attributes;
use serde_json::{Map, Value};

use crate::error::{CliError, CliResult};

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON object of option name to value.
    Json,
    /// TOML table; dotted option names must be quoted.
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension (TOML unless `.json`).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parses raw filter options, keeping their document order.
pub fn parse_options(content: &str, format: ConfigFormat) -> CliResult<Map<String, Value>> {
    let options = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(options)
}

/// Reads and validates a filter configuration file.
pub fn load_filter_config(path: &Path) -> CliResult<RoleMappingConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("failed to read {}: {e}", path.display()))
    })?;
    let options = parse_options(&content, ConfigFormat::from_path(path))?;
    let config = RoleMappingConfig::from_options(&options)?;

    tracing::debug!(
        path = %path.display(),
        roles = config.role_map().len(),
        "filter configuration loaded"
    );
    Ok(config)
}

/// Reads an attribute document from a file, or stdin when no path is given.
pub fn read_attributes(path: Option<&Path>) -> CliResult<Attributes> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&content)?)
}
