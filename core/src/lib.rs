//! lz4-value-codec
//!
//! Threshold-gated LZ4 compression for cache values.
//! Wraps any byte-producing serializer and prepends a self-describing header,
//! so readers never need to know whether a value was compressed.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

pub mod compression;
pub mod framing;
pub mod serializer;
pub mod telemetry;

pub mod codec;

pub use codec::Lz4Codec;
pub use config::CodecConfig;
pub use types::{CodecError, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::Lz4Codec;
    pub use crate::compression::CompressionMode;
    pub use crate::config::CodecConfig;
    pub use crate::serializer::{
        BincodeSerializer, BytesSerializer, JsonSerializer, SerializationError, Utf8Serializer, ValueSerializer,
    };
    pub use crate::telemetry::{CodecObserver, CodecStats, CodecStatsSnapshot, NoopObserver};
    pub use crate::types::CodecError;
}
