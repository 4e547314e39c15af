//! codec.rs
//! LZ4 compressing decorator around a `ValueSerializer`.
//!
//! Encode: `inner.serialize → threshold decision → frame`.
//! Decode: `frame → header lead byte → (decompress) → inner.deserialize`.
//!
//! The threshold is a performance knob only: `decode(encode(v)) == v` on
//! both branches, and decoding never needs to know how a frame was written.
use std::borrow::Cow;
use std::fmt;

use tracing::{debug, warn};

use crate::compression::{compressor_for, decompressor, resolve, BlockCompressor, BlockDecompressor, CompressionMode};
use crate::config::CodecConfig;
use crate::framing::{decode_frame, decompress_payload, encode_compressed, encode_uncompressed, FrameHeader};
use crate::serializer::ValueSerializer;
use crate::telemetry::{CodecObserver, NoopObserver};
use crate::types::Result;

pub struct Lz4Codec<S, O = NoopObserver> {
    inner: S,
    config: CodecConfig,
    compressor: &'static dyn BlockCompressor,
    decompressor: &'static dyn BlockDecompressor,
    observer: O,
}

impl<S: ValueSerializer> Lz4Codec<S, NoopObserver> {
    pub fn new(inner: S, config: CodecConfig) -> Self {
        Self::with_observer(inner, config, NoopObserver)
    }

    /// Threshold 0: every value is compressed and carries the 4-byte header.
    pub fn always_compress(inner: S, mode: CompressionMode) -> Self {
        Self::new(inner, CodecConfig::new(mode, 0))
    }
}

impl<S: ValueSerializer, O: CodecObserver> Lz4Codec<S, O> {
    pub fn with_observer(inner: S, config: CodecConfig, observer: O) -> Self {
        Self {
            inner,
            config,
            compressor: compressor_for(config.mode),
            decompressor: decompressor(),
            observer,
        }
    }

    /// Replace the observer, keeping serializer and configuration.
    pub fn observe<O2: CodecObserver>(self, observer: O2) -> Lz4Codec<S, O2> {
        Lz4Codec {
            inner: self.inner,
            config: self.config,
            compressor: self.compressor,
            decompressor: self.decompressor,
            observer,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Serialize `value` with the inner serializer and frame the result.
    pub fn encode(&self, value: &S::Value) -> Result<Vec<u8>> {
        let raw = self.inner.serialize(value)?;
        self.encode_raw(&raw)
    }

    /// Frame already-serialized bytes.
    pub fn encode_raw(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let compressed = self.config.should_compress(raw.len());
        let frame = if compressed {
            encode_compressed(raw, self.compressor)?
        } else {
            encode_uncompressed(raw)
        };

        self.observer.on_encode(compressed, raw.len(), frame.len());

        if compressed {
            let ratio = raw.len() as f64 / frame.len() as f64;
            debug!(
                mode = %self.config.mode,
                original_len = raw.len(),
                stored_len = frame.len(),
                ratio,
                "value compressed"
            );
        } else {
            debug!(original_len = raw.len(), threshold = self.config.compress_threshold, "value stored uncompressed");
        }

        Ok(frame)
    }

    /// Unframe and deserialize.
    ///
    /// `None` or an empty slice means "no value": it goes straight to the
    /// inner serializer's null handling without touching any header.
    pub fn decode(&self, frame: Option<&[u8]>) -> Result<Option<S::Value>> {
        let wire = match frame {
            Some(w) if !w.is_empty() => w,
            _ => return Ok(self.inner.deserialize(frame)?),
        };

        let raw = self.decode_raw(wire)?;
        Ok(self.inner.deserialize(Some(&raw))?)
    }

    /// Recover the inner-serialized bytes of a non-empty frame.
    /// Uncompressed payloads are borrowed from `wire`.
    pub fn decode_raw<'a>(&self, wire: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let view = decode_frame(wire)?;

        let raw = match view.header {
            FrameHeader::Uncompressed => Cow::Borrowed(view.payload),
            FrameHeader::Compressed { original_len } => {
                let bytes = decompress_payload(&view, self.decompressor).map_err(|e| {
                    warn!(original_len, block_len = view.payload.len(), error = %e, "lz4 decompression failed");
                    e
                })?;
                Cow::Owned(bytes)
            }
        };

        let compressed = view.header.kind().is_compressed();
        self.observer.on_decode(compressed, raw.len());
        debug!(kind = view.header.kind().as_str(), original_len = raw.len(), stored_len = wire.len(), "frame decoded");

        Ok(raw)
    }
}

impl<S: fmt::Debug, O> fmt::Debug for Lz4Codec<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lz4Codec")
            .field("inner", &self.inner)
            .field("config", &self.config)
            .field("backend", &resolve(self.config.mode))
            .finish_non_exhaustive()
    }
}
