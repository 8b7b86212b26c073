//! Error types for AWS attribute mapping.
//!
//! - [`ConfigError`] is raised while building a [`RoleMappingConfig`] and
//!   means the deployment is broken; hosts should fail at startup.
//! - [`MissingAttributeError`] is raised per request when the session cannot
//!   be named; hosts should reject that authentication attempt.
//!
//! [`RoleMappingConfig`]: crate::RoleMappingConfig

use awsfed_spi::StepError;
use thiserror::Error;

/// Result type for configuration construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Option name not recognized.
    #[error("unrecognized configuration key: {0}")]
    UnrecognizedKey(String),

    /// `aws.account` missing or empty.
    #[error("aws account id required")]
    MissingAccountId,

    /// `iam.provider` missing or empty.
    #[error("iam provider name required")]
    MissingProviderName,

    /// Option value could not be coerced to the expected type.
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Option name.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Session duration IAM would reject.
    #[error("session duration {0}s outside the range IAM accepts (900-43200)")]
    SessionDurationOutOfRange(i64),
}

impl ConfigError {
    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Checks if a required option was missing.
    #[must_use]
    pub const fn is_missing_required(&self) -> bool {
        matches!(self, Self::MissingAccountId | Self::MissingProviderName)
    }
}

/// The configured uid attribute was absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no session name available (should have been in '{attribute}')")]
pub struct MissingAttributeError {
    /// Name of the attribute that should have held the value.
    pub attribute: String,
}

impl MissingAttributeError {
    /// Creates a new missing attribute error.
    #[must_use]
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

/// A `Role` attribute value that is not a role/provider ARN pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid role pair '{value}': {reason}")]
pub struct RolePairError {
    /// The rejected value.
    pub value: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl From<ConfigError> for StepError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

impl From<MissingAttributeError> for StepError {
    fn from(err: MissingAttributeError) -> Self {
        Self::missing_attribute(err.attribute)
    }
}
