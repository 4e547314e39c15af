//! compression/codecs/mod.rs
//! LZ4 block backends.
//!
//! - `lz4`: pure-Rust fast encoder and the single decoder used for every frame.
//! - `lz4_hc`: liblz4 high-compression encoder.

pub mod lz4;
pub mod lz4_hc;

pub use lz4::*;
pub use lz4_hc::*;
