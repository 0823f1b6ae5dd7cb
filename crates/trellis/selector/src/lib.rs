//! Trellis Selector - the forced-variation editor workflow
//!
//! The debugger's editor screen boils down to a small state machine over
//! two dependent pickers: choose an experiment, then choose one of its
//! variations, then commit the pair to the override table. This crate is
//! that state machine with every UI concern stripped away.
//!
//! # Key Concepts
//!
//! - **Pick**: what the operator chose in a picker — a real key, or the
//!   leading "unselected" sentinel row. Modeling the sentinel as a sum
//!   type removes the off-by-one index arithmetic a raw row number drags
//!   in.
//! - **Selection**: the machine's state. No experiment, an experiment
//!   alone, or an experiment with a variation. Picking a new experiment
//!   always resets the variation.
//! - **ForcedVariationSelector**: drives `Selection` against a
//!   configuration snapshot and commits via a `ForcedVariationStore`.
//!   Commit failures come back as errors; nothing is swallowed.

#![deny(unsafe_code)]

mod errors;
mod selection;
mod selector;

pub use errors::{SelectorError, SelectorResult};
pub use selection::{Pick, Selection};
pub use selector::ForcedVariationSelector;
