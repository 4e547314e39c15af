//! serializer/mod.rs
//! Inner serializers the codec decorates.
//!
//! `ValueSerializer` is the seam; the bundled implementations cover plain
//! strings, raw bytes, JSON and bincode.

pub mod types;
pub mod string;
pub mod bytes;
pub mod json;
pub mod binary;

pub use types::*;
pub use string::*;
pub use bytes::*;
pub use json::*;
pub use binary::*;
