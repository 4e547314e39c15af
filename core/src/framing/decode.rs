use byteorder::{BigEndian, ByteOrder};

use crate::compression::{BlockDecompressor, DecompressionError};
use crate::constants::{COMPRESSED_HEADER_LEN, MAX_LZ4_EXPANSION};
use crate::framing::types::{FrameError, FrameHeader, FrameKind, FrameView};

/// Read the 4-byte big-endian compressed header.
#[inline]
pub fn read_length_header(wire: &[u8]) -> Result<u32, FrameError> {
    if wire.len() < COMPRESSED_HEADER_LEN {
        return Err(FrameError::Truncated { have: wire.len(), need: COMPRESSED_HEADER_LEN });
    }
    Ok(BigEndian::read_u32(&wire[..COMPRESSED_HEADER_LEN]))
}

/// Parse the header, branching on the lead byte before deciding how many
/// header bytes to consume.
#[inline]
pub fn parse_frame_header(wire: &[u8]) -> Result<FrameHeader, FrameError> {
    let lead = *wire.first().ok_or(FrameError::Empty)?;

    match FrameKind::from_lead_byte(lead) {
        FrameKind::Uncompressed => Ok(FrameHeader::Uncompressed),
        FrameKind::Compressed => Ok(FrameHeader::Compressed {
            original_len: read_length_header(wire)?,
        }),
    }
}

/// Split a frame into header and payload without copying.
pub fn decode_frame(wire: &[u8]) -> Result<FrameView<'_>, FrameError> {
    let header = parse_frame_header(wire)?;
    Ok(FrameView { header, payload: &wire[header.len()..] })
}

/// Recover the original bytes of a frame.
///
/// Uncompressed payloads are copied out verbatim. Compressed payloads are
/// decoded into a buffer of exactly the recorded length; any shortfall or
/// corruption is an error, never a partial result. A recorded length the
/// block could not expand to is rejected before anything is allocated.
pub fn decompress_payload(view: &FrameView<'_>, decompressor: &dyn BlockDecompressor) -> Result<Vec<u8>, DecompressionError> {
    match view.header {
        FrameHeader::Uncompressed => Ok(view.payload.to_vec()),
        FrameHeader::Compressed { original_len } => {
            let claimed = original_len as usize;
            let reachable = view.payload.len().saturating_mul(MAX_LZ4_EXPANSION);
            if claimed > reachable {
                return Err(DecompressionError::Corrupt {
                    msg: format!(
                        "header claims {} bytes, a {}-byte block expands to at most {}",
                        claimed,
                        view.payload.len(),
                        reachable
                    ),
                });
            }

            let mut out = vec![0u8; claimed];
            decompressor.decompress_into(view.payload, &mut out)?;
            Ok(out)
        }
    }
}
