//! framing/mod.rs
//! Self-describing value frames.
//!
//! ```text
//! Uncompressed: [0xFF] [raw (N)]
//! Compressed:   [original_len u32 BE (4)] [lz4 block (M)]
//! ```
//!
//! The lead byte's sign selects the variant: the tag has its high bit set,
//! and original lengths are capped at `i32::MAX` so a length header never does.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
