//! telemetry/observer.rs
//! Observation hook invoked by the codec once per encode and decode.
use std::sync::Arc;

/// Receives one callback per codec call.
///
/// Both methods default to no-ops. Implementations that mutate shared state
/// synchronize it themselves; the codec calls from whatever thread it runs on
/// and gives no ordering guarantee between concurrent calls.
pub trait CodecObserver: Send + Sync {
    /// - `compressed`: whether the compressed branch was taken
    /// - `original_len`: inner-serialized payload length
    /// - `stored_len`: full frame length, header included
    ///
    /// `stored_len` is what lands in the cache, not the bare LZ4 block or raw
    /// payload length. Consumers that total block sizes subtract the header:
    /// 4 bytes when `compressed`, 1 byte (the tag) otherwise.
    fn on_encode(&self, _compressed: bool, _original_len: usize, _stored_len: usize) {}

    /// - `compressed`: frame variant read from the header
    /// - `original_len`: payload length handed to the inner serializer
    fn on_decode(&self, _compressed: bool, _original_len: usize) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CodecObserver for NoopObserver {}

impl<O: CodecObserver + ?Sized> CodecObserver for Arc<O> {
    fn on_encode(&self, compressed: bool, original_len: usize, stored_len: usize) {
        (**self).on_encode(compressed, original_len, stored_len)
    }

    fn on_decode(&self, compressed: bool, original_len: usize) {
        (**self).on_decode(compressed, original_len)
    }
}

impl<O: CodecObserver + ?Sized> CodecObserver for &O {
    fn on_encode(&self, compressed: bool, original_len: usize, stored_len: usize) {
        (**self).on_encode(compressed, original_len, stored_len)
    }

    fn on_decode(&self, compressed: bool, original_len: usize) {
        (**self).on_decode(compressed, original_len)
    }
}
