//! # RnB Test Utilities
//!
//! Shared testing utilities for the engine crates:
//! - Fixture helpers (caches, sites, seeded factories, tracing)
//! - Ledger checks for resource conservation
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod ledger;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
