use thiserror::Error;

use crate::compression::{CompressionError, DecompressionError};
use crate::framing::FrameError;
use crate::serializer::SerializationError;

/// Unified codec error.
/// - `From<T>` impls let `?` cross the serializer, framing and backend layers.
/// - Every variant is fatal and deterministic for the same input; nothing is retried.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Inner serializer failed on either side; surfaced unchanged.
    #[error("inner serialization error: {0}")]
    InnerSerialization(#[from] SerializationError),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    #[error("decompression error: {0}")]
    Decompression(#[from] DecompressionError),

    /// Frame too short for the header its lead byte announces.
    #[error("malformed frame: {0}")]
    MalformedFrame(#[from] FrameError),
}

pub type Result<T> = std::result::Result<T, CodecError>;
