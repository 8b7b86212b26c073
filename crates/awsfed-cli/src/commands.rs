//! Command implementations.

use std::path::Path;

use awsfed_aws::{RoleMappingConfig, SetAwsAttributes, ROLE_ATTRIBUTE};
use awsfed_spi::{Attributes, StepChain};

use crate::cli::ApplyArgs;
use crate::config::{load_filter_config, read_attributes};
use crate::output::{print_attributes, print_config, success, warning, OutputFormat};
use crate::CliResult;

/// Builds the processing chain for a configuration.
#[must_use]
pub fn build_chain(config: RoleMappingConfig) -> StepChain {
    StepChain::new().with_step(SetAwsAttributes::new(config))
}

/// Runs the chain over an attribute set.
pub fn apply_attributes(chain: &StepChain, attributes: Attributes) -> CliResult<Attributes> {
    Ok(chain.process(attributes)?)
}

/// Runs `apply`.
pub fn run_apply(args: ApplyArgs, config_path: &Path, format: OutputFormat) -> CliResult<()> {
    let config = load_filter_config(config_path)?;
    let attributes = read_attributes(args.attributes.as_deref())?;

    let chain = build_chain(config);
    let output = apply_attributes(&chain, attributes)?;

    if !output.contains(ROLE_ATTRIBUTE) {
        warning("No IAM role matched; the Role attribute was not set.");
    }
    print_attributes(&output, format)
}

/// Runs `check`.
pub fn run_check(config_path: &Path, format: OutputFormat) -> CliResult<()> {
    let config = load_filter_config(config_path)?;
    print_config(&config, format)?;
    if matches!(format, OutputFormat::Table) {
        success(&format!("{} is valid", config_path.display()));
    }
    Ok(())
}
