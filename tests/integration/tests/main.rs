//! End-to-End Integration Tests
//!
//! These tests drive the AWS attribute step through its public API and
//! through a processing chain, the way a host pipeline would.

mod common;
mod properties;
mod scenarios;
