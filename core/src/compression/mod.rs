//! compression/mod.rs
//! LZ4 block compression backends.
//!
//! Notes:
//! - Blocks are raw LZ4 blocks with no embedded size; the frame header carries it.
//! - Compression mode picks the encoder only. One decoder serves all modes.
//! - Registry resolves a mode to a shared, stateless backend.

pub mod types;
pub mod registry;
pub mod codecs;

pub use types::*;
pub use registry::*;
