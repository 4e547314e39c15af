//! codecs/lz4_hc.rs
//! liblz4 high-compression block encoder (high-ratio mode).
//!
//! Slower to encode than the fast path; the produced block is a regular LZ4
//! block, so `Lz4BlockDecompressor` reads it unchanged.
use lz4::block::{compress_bound, compress_to_buffer, CompressionMode as Lz4Mode};
use lz4_flex::block::get_maximum_output_size;

use crate::compression::types::{BlockCompressor, CompressionError};
use crate::constants::DEFAULT_LEVEL_LZ4_HC;

#[derive(Debug, Clone, Copy)]
pub struct Lz4HighCompressor {
    level: i32,
}

impl Lz4HighCompressor {
    pub const fn new(level: i32) -> Self {
        Self { level }
    }

    pub const fn level(&self) -> i32 {
        self.level
    }
}

impl Default for Lz4HighCompressor {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_LZ4_HC)
    }
}

impl BlockCompressor for Lz4HighCompressor {
    fn name(&self) -> &'static str {
        "lz4-hc"
    }

    fn max_compressed_len(&self, input_len: usize) -> usize {
        // liblz4 refuses inputs past LZ4_MAX_INPUT_SIZE; the compress call reports that.
        compress_bound(input_len).unwrap_or_else(|_| get_maximum_output_size(input_len))
    }

    fn compress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize, CompressionError> {
        let need = self.max_compressed_len(input.len());
        if out.len() < need {
            return Err(CompressionError::BufferTooSmall { have: out.len(), need });
        }

        compress_to_buffer(input, Some(Lz4Mode::HIGHCOMPRESSION(self.level)), false, out)
            .map_err(|e| CompressionError::Backend {
                codec: self.name(),
                msg: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::codecs::lz4::Lz4BlockDecompressor;
    use crate::compression::types::BlockDecompressor;

    #[test]
    fn hc_block_decodes_with_shared_decompressor() {
        let input = b"the quick brown fox jumps over the lazy dog; ".repeat(40);
        let hc = Lz4HighCompressor::default();
        let mut block = vec![0u8; hc.max_compressed_len(input.len())];
        let n = hc.compress_into(&input, &mut block).unwrap();
        block.truncate(n);

        let mut out = vec![0u8; input.len()];
        Lz4BlockDecompressor.decompress_into(&block, &mut out).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn default_level_is_hc_default() {
        assert_eq!(Lz4HighCompressor::default().level(), DEFAULT_LEVEL_LZ4_HC);
    }
}
