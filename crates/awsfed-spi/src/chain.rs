//! Ordered composition of processing steps.

use std::sync::Arc;

use crate::attributes::Attributes;
use crate::step::{StepResult, TransformStep};

/// An ordered chain of processing steps.
///
/// The chain is built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StepChain {
    steps: Vec<Arc<dyn TransformStep>>,
}

impl StepChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step, builder style.
    #[must_use]
    pub fn with_step(mut self, step: impl TransformStep + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// Appends a shared step.
    pub fn push(&mut self, step: Arc<dyn TransformStep>) {
        self.steps.push(step);
    }

    /// Number of steps in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Identifiers of the steps, in execution order.
    #[must_use]
    pub fn step_ids(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.metadata().id).collect()
    }

    /// Runs every step over the attribute set.
    ///
    /// The set is consumed; on failure it is dropped so that no partially
    /// processed attributes escape.
    ///
    /// ## Errors
    ///
    /// Returns the error of the first failing step.
    pub fn process(&self, mut attributes: Attributes) -> StepResult<Attributes> {
        for step in &self.steps {
            let id = step.metadata().id;
            if let Err(e) = step.apply(&mut attributes) {
                tracing::debug!(step = id, error = %e, "processing step failed");
                return Err(e);
            }
            tracing::trace!(step = id, "processing step applied");
        }
        Ok(attributes)
    }
}
