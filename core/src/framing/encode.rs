use byteorder::{BigEndian, ByteOrder};

use crate::compression::{BlockCompressor, CompressionError};
use crate::constants::{COMPRESSED_HEADER_LEN, MAX_ORIGINAL_LEN, UNCOMPRESSED_HEADER_LEN, UNCOMPRESSED_TAG};

/// Write `len` as the 4-byte big-endian compressed header.
#[inline]
pub fn write_length_header(buf: &mut [u8], len: usize) -> Result<(), CompressionError> {
    if len > MAX_ORIGINAL_LEN {
        return Err(CompressionError::PayloadTooLarge { len, max: MAX_ORIGINAL_LEN });
    }
    if buf.len() < COMPRESSED_HEADER_LEN {
        return Err(CompressionError::BufferTooSmall { have: buf.len(), need: COMPRESSED_HEADER_LEN });
    }
    BigEndian::write_u32(&mut buf[..COMPRESSED_HEADER_LEN], len as u32);
    Ok(())
}

/// Uncompressed frame.
///
/// Layout:
///
/// ```text
/// [ tag 0xFF (1) ]
/// [ raw (N) ]
/// ```
pub fn encode_uncompressed(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(UNCOMPRESSED_HEADER_LEN + raw.len());
    out.push(UNCOMPRESSED_TAG);
    out.extend_from_slice(raw);
    out
}

/// Compressed frame.
///
/// Layout:
///
/// ```text
/// [ original_len u32 BE (4) ]
/// [ lz4 block (M) ]
/// ```
///
/// The buffer is sized for the worst case, then truncated to what the
/// backend actually wrote.
pub fn encode_compressed(raw: &[u8], compressor: &dyn BlockCompressor) -> Result<Vec<u8>, CompressionError> {
    if raw.len() > MAX_ORIGINAL_LEN {
        return Err(CompressionError::PayloadTooLarge { len: raw.len(), max: MAX_ORIGINAL_LEN });
    }

    let max_block = compressor.max_compressed_len(raw.len());
    let mut out = vec![0u8; COMPRESSED_HEADER_LEN + max_block];

    write_length_header(&mut out, raw.len())?;
    let written = compressor.compress_into(raw, &mut out[COMPRESSED_HEADER_LEN..])?;
    out.truncate(COMPRESSED_HEADER_LEN + written);

    Ok(out)
}
