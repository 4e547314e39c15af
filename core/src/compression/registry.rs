//! compression/registry.rs
//! Resolves a `CompressionMode` to its backend.

use crate::compression::codecs::{Lz4BlockDecompressor, Lz4FastCompressor, Lz4HighCompressor};
use crate::compression::types::{BlockCompressor, BlockDecompressor, CompressionMode};
use crate::constants::DEFAULT_LEVEL_LZ4_HC;

static LZ4_FAST: Lz4FastCompressor = Lz4FastCompressor;
static LZ4_HC: Lz4HighCompressor = Lz4HighCompressor::new(DEFAULT_LEVEL_LZ4_HC);
static LZ4_DECOMPRESSOR: Lz4BlockDecompressor = Lz4BlockDecompressor;

/// Backend identity for logs and `Debug` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecInfo {
    pub name: &'static str,
    pub mode: CompressionMode,
    pub level: i32,
}

pub fn resolve(mode: CompressionMode) -> CodecInfo {
    match mode {
        CompressionMode::Fast =>
            CodecInfo { name: LZ4_FAST.name(), mode, level: 0 },
        CompressionMode::HighRatio =>
            CodecInfo { name: LZ4_HC.name(), mode, level: LZ4_HC.level() },
    }
}

/// Shared compressor instance for `mode`.
pub fn compressor_for(mode: CompressionMode) -> &'static dyn BlockCompressor {
    match mode {
        CompressionMode::Fast => &LZ4_FAST,
        CompressionMode::HighRatio => &LZ4_HC,
    }
}

/// The decompressor is mode-agnostic.
pub fn decompressor() -> &'static dyn BlockDecompressor {
    &LZ4_DECOMPRESSOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_resolve_to_distinct_backends() {
        assert_eq!(compressor_for(CompressionMode::Fast).name(), "lz4");
        assert_eq!(compressor_for(CompressionMode::HighRatio).name(), "lz4-hc");
        assert_eq!(resolve(CompressionMode::HighRatio).level, DEFAULT_LEVEL_LZ4_HC);
    }
}
