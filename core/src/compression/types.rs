//! compression/types.rs
//! Compression mode selector, backend traits and error types.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Speed/ratio trade-off of the encoder.
///
/// Only the encoder is affected: every mode produces a plain LZ4 block and
/// a single decoder handles all of them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompressionMode {
    #[default]
    Fast,
    HighRatio,
}

impl CompressionMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            CompressionMode::Fast      => "fast",
            CompressionMode::HighRatio => "high-ratio",
        }
    }
}

impl fmt::Display for CompressionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionMode {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fast" => Ok(CompressionMode::Fast),
            "high-ratio" | "high_ratio" | "high" => Ok(CompressionMode::HighRatio),
            other => Err(CompressionError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompressionError {
    #[error("payload too large for length header: {len} > {max}")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("output buffer too small: {have} < {need}")]
    BufferTooSmall { have: usize, need: usize },

    #[error("codec {codec} process failed: {msg}")]
    Backend { codec: &'static str, msg: String },

    #[error("unknown compression mode: {0}")]
    UnknownMode(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("corrupt or truncated lz4 block: {msg}")]
    Corrupt { msg: String },

    #[error("decompressed length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Block compressor. Implementations are stateless and shared across threads.
pub trait BlockCompressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Worst-case compressed size for `input_len` bytes.
    fn max_compressed_len(&self, input_len: usize) -> usize;

    /// Compress `input` into `out`, returning the number of bytes written.
    /// `out` must hold at least `max_compressed_len(input.len())` bytes.
    fn compress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize, CompressionError>;
}

pub trait BlockDecompressor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Decompress `input` into `out`, which is sized to the exact expected length.
    fn decompress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize, DecompressionError>;
}
