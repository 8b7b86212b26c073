//! Role mapping configuration.
//!
//! A [`RoleMappingConfig`] is built once at startup, either through the typed
//! [`RoleMappingConfigBuilder`] or from raw filter options with
//! [`RoleMappingConfig::from_options`], and is never mutated afterwards.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::coerce;
use crate::constants::{
    ACCOUNT_ID_LEN, DEFAULT_ROLE_ATTRIBUTE, DEFAULT_SESSION_DURATION_SECS, DEFAULT_UID_ATTRIBUTE,
    KEY_AWS_ACCOUNT, KEY_IAM_PROVIDER, KEY_IAM_ROLES, KEY_MATCH_ALL, KEY_ROLE_ATTRIBUTE,
    KEY_SESSION_DURATION, KEY_UID_ATTRIBUTE, MAX_SESSION_DURATION_SECS, MIN_SESSION_DURATION_SECS,
};
use crate::error::{ConfigError, ConfigResult};
use crate::role_pair::RolePair;

// ============================================================================
// Role Mapping
// ============================================================================

/// An IAM role and the local roles that grant it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleMapping {
    target_role: String,
    granting_roles: BTreeSet<String>,
}

impl RoleMapping {
    /// Creates a new mapping.
    #[must_use]
    pub fn new<I, S>(target_role: impl Into<String>, granting_roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target_role: target_role.into(),
            granting_roles: granting_roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the IAM role.
    #[must_use]
    pub fn target_role(&self) -> &str {
        &self.target_role
    }

    /// Local roles granting the IAM role.
    #[must_use]
    pub fn granting_roles(&self) -> &BTreeSet<String> {
        &self.granting_roles
    }

    /// Checks whether any of the user's local roles grants this IAM role.
    #[must_use]
    pub fn is_granted_by(&self, local_roles: &BTreeSet<&str>) -> bool {
        self.granting_roles
            .iter()
            .any(|r| local_roles.contains(r.as_str()))
    }
}

// ============================================================================
// Role Mapping Configuration
// ============================================================================

/// Validated, immutable configuration of the AWS attribute step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleMappingConfig {
    account_id: String,
    provider_name: String,
    uid_attribute: String,
    role_attributes: Vec<String>,
    role_map: Vec<RoleMapping>,
    session_duration_secs: u32,
    match_all: bool,
}

impl RoleMappingConfig {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn builder() -> RoleMappingConfigBuilder {
        RoleMappingConfigBuilder::new()
    }

    /// Builds a configuration from raw filter options.
    ///
    /// Options are applied in the order given; the order of `iam.roles`
    /// entries decides which role wins in first-match mode.
    ///
    /// ## Errors
    ///
    /// Returns an error if an option name is unrecognized, a value cannot be
    /// coerced, or `aws.account` / `iam.provider` is missing.
    pub fn from_options(options: &Map<String, Value>) -> ConfigResult<Self> {
        let mut builder = Self::builder();

        for (key, value) in options {
            builder = match key.as_str() {
                KEY_UID_ATTRIBUTE => builder.uid_attribute(coerce::to_string(key, value)?),
                KEY_ROLE_ATTRIBUTE => builder.role_attributes(coerce::to_list(key, value)?),
                KEY_SESSION_DURATION => builder.session_duration(coerce::to_int(key, value)?),
                KEY_AWS_ACCOUNT => builder.account_id(coerce::to_string(key, value)?),
                KEY_IAM_PROVIDER => builder.provider_name(coerce::to_string(key, value)?),
                KEY_MATCH_ALL => builder.match_all(coerce::to_bool(key, value)?),
                KEY_IAM_ROLES => {
                    let Value::Object(roles) = value else {
                        return Err(ConfigError::invalid(
                            key,
                            "expected a map of IAM role names to local roles",
                        ));
                    };
                    for (target, granting) in roles {
                        let granting = coerce::to_list(&format!("{key}.{target}"), granting)?;
                        builder = builder.role(target.clone(), granting);
                    }
                    builder
                }
                _ => return Err(ConfigError::UnrecognizedKey(key.clone())),
            };
        }

        builder.build()
    }

    /// AWS account id.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Name of the SAML provider registration in IAM.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Attribute holding the session identifier.
    #[must_use]
    pub fn uid_attribute(&self) -> &str {
        &self.uid_attribute
    }

    /// Attributes holding local role identifiers.
    #[must_use]
    pub fn role_attributes(&self) -> &[String] {
        &self.role_attributes
    }

    /// IAM role mappings, in configured order.
    #[must_use]
    pub fn role_map(&self) -> &[RoleMapping] {
        &self.role_map
    }

    /// Session duration in seconds.
    #[must_use]
    pub const fn session_duration_secs(&self) -> u32 {
        self.session_duration_secs
    }

    /// Whether every matching role is emitted.
    #[must_use]
    pub const fn match_all(&self) -> bool {
        self.match_all
    }

    /// Builds the role/provider ARN pair for an IAM role in this account.
    #[must_use]
    pub fn role_pair(&self, target_role: &str) -> RolePair {
        RolePair::new(&self.account_id, target_role, &self.provider_name)
    }
}

impl TryFrom<&Map<String, Value>> for RoleMappingConfig {
    type Error = ConfigError;

    fn try_from(options: &Map<String, Value>) -> ConfigResult<Self> {
        Self::from_options(options)
    }
}

// ============================================================================
// Configuration Builder
// ============================================================================

/// Builder for [`RoleMappingConfig`].
#[derive(Debug, Clone)]
pub struct RoleMappingConfigBuilder {
    account_id: Option<String>,
    provider_name: Option<String>,
    uid_attribute: String,
    role_attributes: Vec<String>,
    role_map: Vec<RoleMapping>,
    session_duration_secs: i64,
    match_all: bool,
}

impl Default for RoleMappingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleMappingConfigBuilder {
    /// Creates a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            account_id: None,
            provider_name: None,
            uid_attribute: DEFAULT_UID_ATTRIBUTE.to_string(),
            role_attributes: vec![DEFAULT_ROLE_ATTRIBUTE.to_string()],
            role_map: Vec::new(),
            session_duration_secs: i64::from(DEFAULT_SESSION_DURATION_SECS),
            match_all: false,
        }
    }

    /// Sets the AWS account id (required).
    #[must_use]
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Sets the IAM SAML provider name (required).
    #[must_use]
    pub fn provider_name(mut self, provider_name: impl Into<String>) -> Self {
        self.provider_name = Some(provider_name.into());
        self
    }

    /// Sets the attribute holding the session identifier.
    #[must_use]
    pub fn uid_attribute(mut self, name: impl Into<String>) -> Self {
        self.uid_attribute = name.into();
        self
    }

    /// Uses a single attribute for local roles.
    #[must_use]
    pub fn role_attribute(self, name: impl Into<String>) -> Self {
        self.role_attributes([name])
    }

    /// Sets the attributes holding local roles.
    #[must_use]
    pub fn role_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.role_attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the session duration in seconds.
    #[must_use]
    pub const fn session_duration(mut self, secs: i64) -> Self {
        self.session_duration_secs = secs;
        self
    }

    /// Sets whether every matching role is emitted.
    #[must_use]
    pub const fn match_all(mut self, match_all: bool) -> Self {
        self.match_all = match_all;
        self
    }

    /// Maps an IAM role to the local roles granting it.
    ///
    /// Mappings keep the order they were first added in. Mapping the same
    /// IAM role again replaces its granting roles without moving it.
    #[must_use]
    pub fn role<I, S>(mut self, target_role: impl Into<String>, granting_roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mapping = RoleMapping::new(target_role, granting_roles);
        match self
            .role_map
            .iter_mut()
            .find(|m| m.target_role == mapping.target_role)
        {
            Some(existing) => *existing = mapping,
            None => self.role_map.push(mapping),
        }
        self
    }

    /// Builds the configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The account id or provider name is missing or blank
    /// - The uid attribute name is blank
    /// - The session duration is outside 900-43200 seconds
    pub fn build(self) -> ConfigResult<RoleMappingConfig> {
        let account_id = non_blank(self.account_id).ok_or(ConfigError::MissingAccountId)?;
        let provider_name =
            non_blank(self.provider_name).ok_or(ConfigError::MissingProviderName)?;

        if self.uid_attribute.trim().is_empty() {
            return Err(ConfigError::invalid(
                KEY_UID_ATTRIBUTE,
                "attribute name cannot be empty",
            ));
        }

        let session_duration_secs = u32::try_from(self.session_duration_secs)
            .ok()
            .filter(|secs| (MIN_SESSION_DURATION_SECS..=MAX_SESSION_DURATION_SECS).contains(secs))
            .ok_or(ConfigError::SessionDurationOutOfRange(
                self.session_duration_secs,
            ))?;

        if account_id.len() != ACCOUNT_ID_LEN || !account_id.bytes().all(|b| b.is_ascii_digit()) {
            tracing::warn!(
                account_id = %account_id,
                "AWS account id is not a 12-digit number; IAM will reject the role ARNs"
            );
        }
        if self.role_map.is_empty() {
            tracing::warn!("no IAM roles configured; the Role attribute will never be set");
        }

        Ok(RoleMappingConfig {
            account_id,
            provider_name,
            uid_attribute: self.uid_attribute,
            role_attributes: self.role_attributes,
            role_map: self.role_map,
            session_duration_secs,
            match_all: self.match_all,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
