// Wire compatibility: frames built by hand, byte for byte, decode through the codec.

#[cfg(test)]
mod tests {
    use lz4_value_codec::compression::{compressor_for, decompressor, CompressionMode};
    use lz4_value_codec::framing::{decode_frame, decompress_payload, encode_compressed, FrameHeader, FrameKind};
    use lz4_value_codec::prelude::*;

// # ✅ 1. Hand-built uncompressed frame

    #[test]
    fn hand_built_uncompressed_frame_decodes() {
        let mut wire = vec![0xFF];
        wire.extend_from_slice("hand built".as_bytes());

        let codec = Lz4Codec::new(Utf8Serializer, CodecConfig::default());
        assert_eq!(codec.decode(Some(&wire)).unwrap().as_deref(), Some("hand built"));
    }

// # ✅ 2. Hand-built compressed frame from a raw lz4_flex block

    #[test]
    fn hand_built_compressed_frame_decodes() {
        let raw = "0123456789".repeat(50);
        let block = lz4_flex::block::compress(raw.as_bytes());

        let mut wire = (raw.len() as u32).to_be_bytes().to_vec();
        wire.extend_from_slice(&block);

        let codec = Lz4Codec::new(Utf8Serializer, CodecConfig::default());
        assert_eq!(codec.decode(Some(&wire)).unwrap(), Some(raw));
    }

// # ✅ 3. Codec output is a plain lz4 block after the header

    #[test]
    fn codec_block_is_standard_lz4() {
        let raw = vec![b'm'; 5000];
        let wire = encode_compressed(&raw, compressor_for(CompressionMode::HighRatio)).unwrap();

        let len = u32::from_be_bytes([wire[0], wire[1], wire[2], wire[3]]) as usize;
        let direct = lz4_flex::block::decompress(&wire[4..], len).unwrap();
        assert_eq!(direct, raw);
    }

// # ✅ 4. View accessors

    #[test]
    fn view_reports_original_and_stored_lengths() {
        let raw = vec![b'v'; 3000];
        let wire = encode_compressed(&raw, compressor_for(CompressionMode::Fast)).unwrap();
        let view = decode_frame(&wire).unwrap();

        assert_eq!(view.header.kind(), FrameKind::Compressed);
        assert_eq!(view.header, FrameHeader::Compressed { original_len: 3000 });
        assert_eq!(view.original_len(), 3000);
        assert_eq!(view.stored_len(), wire.len());
        assert_eq!(decompress_payload(&view, decompressor()).unwrap(), raw);
    }
}
