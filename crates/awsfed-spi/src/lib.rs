//! # awsfed-spi
//!
//! Processing-step contract for attribute transformation pipelines.
//!
//! A host authentication pipeline collects attributes about the user after
//! primary authentication and hands them to a sequence of processing steps
//! before the attributes are written into an outgoing assertion.
//!
//! ## Design
//!
//! - [`Attributes`] - multi-valued attribute set owned by the caller
//! - [`TransformStep`] - capability implemented by every processing step
//! - [`StepChain`] - ordered composition of steps with all-or-nothing results

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod attributes;
pub mod chain;
pub mod step;

pub use attributes::Attributes;
pub use chain::StepChain;
pub use step::{StepError, StepMetadata, StepResult, TransformStep};
