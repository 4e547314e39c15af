//! telemetry/mod.rs
//! Codec observation: hook trait, shared counters and immutable snapshots.
//!
//! The codec only ever calls the `CodecObserver` it was built with.
//! `CodecStats` is one such observer, owned by the caller.

pub mod observer;
pub mod counters;
pub mod snapshot;

pub use observer::*;
pub use counters::*;
pub use snapshot::*;
