//! The AWS attribute transformation.
//!
//! For every authentication event:
//!
//! 1. The first value of the uid attribute becomes `RoleSessionName`
//!    (missing or empty is fatal).
//! 2. `SessionDuration` is set from the configuration.
//! 3. Local roles are collected from every configured role attribute.
//! 4. Each IAM role whose granting roles intersect the local roles adds its
//!    ARN pair to `Role`, stopping after the first unless `match.all` is set.

use std::collections::BTreeSet;
use std::sync::Arc;

use awsfed_spi::{Attributes, StepMetadata, StepResult, TransformStep};
use serde_json::{Map, Value};

use crate::config::{RoleMapping, RoleMappingConfig};
use crate::constants::{ROLE_ATTRIBUTE, ROLE_SESSION_NAME_ATTRIBUTE, SESSION_DURATION_ATTRIBUTE};
use crate::error::MissingAttributeError;

/// Adds the AWS attributes to `attributes` in place.
///
/// `RoleSessionName` and `SessionDuration` replace any existing values.
/// Matched role pairs are appended to `Role`; when nothing matches `Role` is
/// left as it was (absent for a fresh attribute set).
///
/// ## Errors
///
/// Returns [`MissingAttributeError`] if the uid attribute is absent or its
/// first value is empty. The attribute set is not modified in that case.
pub fn apply(
    attributes: &mut Attributes,
    config: &RoleMappingConfig,
) -> Result<(), MissingAttributeError> {
    let session_name = attributes
        .first(config.uid_attribute())
        .ok_or_else(|| MissingAttributeError::new(config.uid_attribute()))?
        .to_string();

    let granted: Vec<String> = {
        let local = local_roles(attributes, config.role_attributes());
        matching_roles(config, &local)
            .into_iter()
            .map(|m| config.role_pair(m.target_role()).to_string())
            .collect()
    };

    tracing::debug!(
        uid_attribute = config.uid_attribute(),
        roles = granted.len(),
        match_all = config.match_all(),
        "setting AWS attributes"
    );

    attributes.set(ROLE_SESSION_NAME_ATTRIBUTE, session_name);
    attributes.set(
        SESSION_DURATION_ATTRIBUTE,
        config.session_duration_secs().to_string(),
    );
    for pair in granted {
        attributes.push(ROLE_ATTRIBUTE, pair);
    }

    Ok(())
}

/// Owning variant of [`apply`]: returns the augmented attribute set.
///
/// ## Errors
///
/// Returns [`MissingAttributeError`] if the uid attribute is absent or empty.
pub fn transform(
    mut attributes: Attributes,
    config: &RoleMappingConfig,
) -> Result<Attributes, MissingAttributeError> {
    apply(&mut attributes, config)?;
    Ok(attributes)
}

/// Union of all values across the given role attributes.
///
/// Absent attributes contribute nothing.
#[must_use]
pub fn local_roles<'a>(attributes: &'a Attributes, role_attributes: &[String]) -> BTreeSet<&'a str> {
    role_attributes
        .iter()
        .flat_map(|name| attributes.values(name))
        .map(String::as_str)
        .collect()
}

/// IAM role mappings granted by `local_roles`, in configured order.
///
/// Yields at most one mapping unless the configuration has `match.all` set.
#[must_use]
pub fn matching_roles<'c>(
    config: &'c RoleMappingConfig,
    local_roles: &BTreeSet<&str>,
) -> Vec<&'c RoleMapping> {
    let matches = config
        .role_map()
        .iter()
        .filter(|mapping| mapping.is_granted_by(local_roles));

    if config.match_all() {
        matches.collect()
    } else {
        matches.take(1).collect()
    }
}

// ============================================================================
// Processing Step
// ============================================================================

/// Processing step that sets the AWS IAM SAML attributes.
#[derive(Debug, Clone)]
pub struct SetAwsAttributes {
    config: Arc<RoleMappingConfig>,
}

impl SetAwsAttributes {
    /// Step identifier.
    pub const ID: &'static str = "aws-set-attributes";

    /// Creates the step from a validated configuration.
    #[must_use]
    pub fn new(config: impl Into<Arc<RoleMappingConfig>>) -> Self {
        Self {
            config: config.into(),
        }
    }

    /// Creates the step from raw filter options.
    ///
    /// ## Errors
    ///
    /// Returns [`StepError::Configuration`](awsfed_spi::StepError::Configuration)
    /// if the options do not form a valid configuration.
    pub fn from_options(options: &Map<String, Value>) -> StepResult<Self> {
        let config = RoleMappingConfig::from_options(options)?;
        Ok(Self::new(config))
    }

    /// The step's configuration.
    #[must_use]
    pub fn config(&self) -> &RoleMappingConfig {
        &self.config
    }
}

impl TransformStep for SetAwsAttributes {
    fn metadata(&self) -> StepMetadata {
        StepMetadata {
            id: Self::ID,
            name: "Set AWS attributes",
            description: "Adds AWS IAM Role, RoleSessionName and SessionDuration attributes",
        }
    }

    fn apply(&self, attributes: &mut Attributes) -> StepResult<()> {
        apply(attributes, &self.config).map_err(Into::into)
    }
}
