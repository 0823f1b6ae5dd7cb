//! Trellis Dispatch - outbound analytics events
//!
//! A `DispatchEvent` pairs a destination URL with a pre-serialized request
//! body: one analytics event, ready for transport. Events are built by
//! whatever layer serializes them, handed to an `EventDispatcher` exactly
//! once, and discarded. No reuse, no pooling.
//!
//! Transport is deliberately out of scope. The `EventDispatcher` trait is
//! the seam a real HTTP sender plugs into; this crate ships only the
//! in-memory sink used by tests and the debugger.

#![deny(unsafe_code)]

mod dispatcher;
mod event;

pub use dispatcher::{DispatchError, DispatchResult, EventDispatcher, InMemoryDispatcher};
pub use event::{DispatchEvent, DEFAULT_EVENT_ENDPOINT};
