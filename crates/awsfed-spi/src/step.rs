//! Processing-step trait and error types.

use std::fmt::Debug;

use thiserror::Error;

use crate::attributes::Attributes;

/// Result type for processing steps.
pub type StepResult<T> = Result<T, StepError>;

/// Errors raised by processing steps.
#[derive(Debug, Error)]
pub enum StepError {
    /// The step was built from an invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required input attribute was absent or empty.
    #[error("missing attribute: {0}")]
    MissingAttribute(String),
}

impl StepError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a missing attribute error.
    #[must_use]
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::MissingAttribute(name.into())
    }

    /// Checks if this error stems from configuration.
    ///
    /// Hosts should treat these as deployment failures.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Checks if this error stems from unusable input attributes.
    ///
    /// Hosts should reject the current authentication attempt.
    #[must_use]
    pub const fn is_missing_attribute(&self) -> bool {
        matches!(self, Self::MissingAttribute(_))
    }
}

/// Metadata describing a processing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMetadata {
    /// Unique identifier for this step type.
    pub id: &'static str,

    /// Human-readable name.
    pub name: &'static str,

    /// Description of what this step does.
    pub description: &'static str,
}

/// A processing step in the host authentication pipeline.
///
/// Steps hold only immutable configuration, so one instance may serve any
/// number of concurrent requests. Each call receives an attribute set owned
/// by the caller.
///
/// Implementations must finish all validation before touching the attribute
/// set: an `Err` return means the set was not modified.
pub trait TransformStep: Send + Sync + Debug {
    /// Returns metadata about this step.
    fn metadata(&self) -> StepMetadata;

    /// Applies the step to an attribute set.
    ///
    /// ## Errors
    ///
    /// Returns an error if the attributes cannot be processed. The host
    /// should abort the authentication attempt.
    fn apply(&self, attributes: &mut Attributes) -> StepResult<()>;
}
