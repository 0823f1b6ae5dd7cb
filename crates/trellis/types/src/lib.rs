//! Trellis Types - core data model for the experimentation SDK
//!
//! An experiment is a named test with one or more variations, sourced from
//! the live configuration. The configuration is an immutable snapshot parsed
//! from a JSON datafile; runtime components share it read-only and answer
//! every question about experiments and variations from it.
//!
//! # Key Concepts
//!
//! - **ExperimentKey / VariationKey / UserId**: typed string keys. Raw
//!   strings never cross crate boundaries.
//! - **ConfigSnapshot**: the parsed, validated configuration. Immutable
//!   after construction; lookups for vanished experiments yield `None`
//!   rather than errors so callers can degrade to empty candidate lists.
//! - **Experiment / Variation**: one named test and its treatment arms,
//!   in the order the configuration produced them.

#![deny(unsafe_code)]

mod config;
mod errors;
mod keys;

pub use config::{ConfigSnapshot, Experiment, Variation};
pub use errors::{ConfigError, ConfigResult};
pub use keys::{ExperimentKey, UserId, VariationKey};
