//! codecs/lz4.rs
//! Pure-Rust LZ4 block encoder (fast mode) and the shared block decoder.
//!
//! Blocks carry no size prefix and no checksum: the frame header owns the
//! original length, and the decoder is handed an output buffer of exactly
//! that size.
use lz4_flex::block::{compress_into, decompress_into, get_maximum_output_size};

use crate::compression::types::{BlockCompressor, BlockDecompressor, CompressionError, DecompressionError};

/// LZ4 fast-mode block compressor backed by `lz4_flex`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lz4FastCompressor;

/// LZ4 block decompressor. Accepts output of every compressor in this module tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lz4BlockDecompressor;

impl BlockCompressor for Lz4FastCompressor {
    fn name(&self) -> &'static str {
        "lz4"
    }

    #[inline]
    fn max_compressed_len(&self, input_len: usize) -> usize {
        get_maximum_output_size(input_len)
    }

    fn compress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize, CompressionError> {
        let need = self.max_compressed_len(input.len());
        if out.len() < need {
            return Err(CompressionError::BufferTooSmall { have: out.len(), need });
        }

        compress_into(input, out).map_err(|e| CompressionError::Backend {
            codec: self.name(),
            msg: e.to_string(),
        })
    }
}

impl BlockDecompressor for Lz4BlockDecompressor {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn decompress_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize, DecompressionError> {
        let expected = out.len();
        let written = decompress_into(input, out)
            .map_err(|e| DecompressionError::Corrupt { msg: e.to_string() })?;

        // A block cut short at a sequence boundary can decode cleanly but short.
        if written != expected {
            return Err(DecompressionError::LengthMismatch { expected, actual: written });
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_block_roundtrip() {
        let input = b"abcabcabcabcabcabcabcabcabcabcabcabc".repeat(8);
        let mut block = vec![0u8; Lz4FastCompressor.max_compressed_len(input.len())];
        let n = Lz4FastCompressor.compress_into(&input, &mut block).unwrap();
        block.truncate(n);
        assert!(n < input.len());

        let mut out = vec![0u8; input.len()];
        let written = Lz4BlockDecompressor.decompress_into(&block, &mut out).unwrap();
        assert_eq!(written, input.len());
        assert_eq!(out, input);
    }

    #[test]
    fn undersized_output_is_rejected_before_backend() {
        let input = vec![7u8; 64];
        let mut block = vec![0u8; 4];
        assert!(matches!(
            Lz4FastCompressor.compress_into(&input, &mut block),
            Err(CompressionError::BufferTooSmall { have: 4, .. })
        ));
    }

    #[test]
    fn oversized_output_buffer_reports_length_mismatch() {
        let input = vec![1u8; 100];
        let mut block = vec![0u8; Lz4FastCompressor.max_compressed_len(input.len())];
        let n = Lz4FastCompressor.compress_into(&input, &mut block).unwrap();
        block.truncate(n);

        let mut out = vec![0u8; input.len() + 10];
        assert!(Lz4BlockDecompressor.decompress_into(&block, &mut out).is_err());
    }
}
