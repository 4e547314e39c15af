/// Tag byte marking an uncompressed frame.
/// `-1` as a signed byte; a valid length header never starts with the high bit set.
pub const UNCOMPRESSED_TAG: u8 = 0xFF;

/// Header width of an uncompressed frame (the tag byte).
pub const UNCOMPRESSED_HEADER_LEN: usize = 1;

/// Header width of a compressed frame (big-endian u32 original length).
pub const COMPRESSED_HEADER_LEN: usize = 4;

/// Largest payload the compressed header can describe without setting the high bit.
pub const MAX_ORIGINAL_LEN: usize = i32::MAX as usize;

/// Defaults when the caller does not configure the codec.
pub const DEFAULT_COMPRESS_THRESHOLD: usize = 1024;

/// liblz4 HC level used by `CompressionMode::HighRatio` (LZ4HC_CLEVEL_DEFAULT).
pub const DEFAULT_LEVEL_LZ4_HC: i32 = 9;

/// Upper bound on LZ4 block expansion: one input byte yields at most 255 output bytes.
pub const MAX_LZ4_EXPANSION: usize = 255;
