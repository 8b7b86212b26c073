//! Output formatting utilities.

use awsfed_aws::RoleMappingConfig;
use awsfed_spi::Attributes;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::CliResult;

/// Output format.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints a warning message.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// One attribute value per row.
#[derive(Debug, Tabled, Serialize)]
pub struct AttributeRow {
    /// Attribute name.
    #[tabled(rename = "Attribute")]
    pub name: String,
    /// Attribute value.
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Flattens an attribute set into rows, in name order.
#[must_use]
pub fn attribute_rows(attributes: &Attributes) -> Vec<AttributeRow> {
    attributes
        .iter()
        .flat_map(|(name, values)| {
            values.iter().map(move |value| AttributeRow {
                name: name.clone(),
                value: value.clone(),
            })
        })
        .collect()
}

/// Prints an attribute set.
pub fn print_attributes(attributes: &Attributes, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            let table = Table::new(attribute_rows(attributes))
                .with(Style::rounded())
                .to_string();
            println!("{table}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(attributes)?);
        }
    }
    Ok(())
}

/// One IAM role mapping per row.
#[derive(Debug, Tabled)]
struct RoleRow {
    #[tabled(rename = "IAM Role")]
    role: String,
    #[tabled(rename = "Granted By")]
    granted_by: String,
    #[tabled(rename = "Role Pair")]
    pair: String,
}

/// Prints a summary of a validated configuration.
pub fn print_config(config: &RoleMappingConfig, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            println!("{:<18} {}", "Account:".bold(), config.account_id());
            println!("{:<18} {}", "Provider:".bold(), config.provider_name());
            println!("{:<18} {}", "Uid attribute:".bold(), config.uid_attribute());
            println!(
                "{:<18} {}",
                "Role attributes:".bold(),
                config.role_attributes().join(", ")
            );
            println!(
                "{:<18} {}s",
                "Session duration:".bold(),
                config.session_duration_secs()
            );
            println!(
                "{:<18} {}",
                "Match mode:".bold(),
                if config.match_all() { "all" } else { "first" }
            );

            if config.role_map().is_empty() {
                warning("No IAM roles configured.");
            } else {
                let rows: Vec<RoleRow> = config
                    .role_map()
                    .iter()
                    .map(|m| RoleRow {
                        role: m.target_role().to_string(),
                        granted_by: m
                            .granting_roles()
                            .iter()
                            .map(String::as_str)
                            .collect::<Vec<_>>()
                            .join(", "),
                        pair: config.role_pair(m.target_role()).to_string(),
                    })
                    .collect();
                println!("{}", Table::new(rows).with(Style::rounded()));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_attribute_order() {
        let mut attrs = Attributes::new();
        attrs.set_values("group", ["admin", "other"]);
        attrs.set("uid", "alice");

        let rows = attribute_rows(&attrs);
        let flat: Vec<_> = rows
            .iter()
            .map(|r| (r.name.as_str(), r.value.as_str()))
            .collect();
        assert_eq!(
            flat,
            vec![("group", "admin"), ("group", "other"), ("uid", "alice")]
        );
    }
}
