//! telemetry/counters.rs
//! Shared running totals fed by the codec's observer hook.
//!
//! Caller-owned: hand the codec an `Arc<CodecStats>` (or `&CodecStats`) and
//! read it back with `snapshot()` / `take()`. The codec never resets it.
use std::sync::atomic::{AtomicU64, Ordering};

use crate::telemetry::observer::CodecObserver;
use crate::telemetry::snapshot::CodecStatsSnapshot;

/// Lock-free encode/decode counters.
#[derive(Debug, Default)]
pub struct CodecStats {
    encode_count: AtomicU64,
    encode_compressed: AtomicU64,
    bytes_original: AtomicU64,
    bytes_stored: AtomicU64,
    decode_count: AtomicU64,
    decode_compressed: AtomicU64,
}

impl CodecStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one encode.
    pub fn add_encode(&self, compressed: bool, original_len: usize, stored_len: usize) {
        self.encode_count.fetch_add(1, Ordering::Relaxed);
        if compressed {
            self.encode_compressed.fetch_add(1, Ordering::Relaxed);
        }
        self.bytes_original.fetch_add(original_len as u64, Ordering::Relaxed);
        self.bytes_stored.fetch_add(stored_len as u64, Ordering::Relaxed);
    }

    /// Record one decode.
    pub fn add_decode(&self, compressed: bool) {
        self.decode_count.fetch_add(1, Ordering::Relaxed);
        if compressed {
            self.decode_compressed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Point-in-time copy. Counters updated concurrently may be seen mid-call.
    pub fn snapshot(&self) -> CodecStatsSnapshot {
        CodecStatsSnapshot {
            encode_count: self.encode_count.load(Ordering::Relaxed),
            encode_compressed: self.encode_compressed.load(Ordering::Relaxed),
            bytes_original: self.bytes_original.load(Ordering::Relaxed),
            bytes_stored: self.bytes_stored.load(Ordering::Relaxed),
            decode_count: self.decode_count.load(Ordering::Relaxed),
            decode_compressed: self.decode_compressed.load(Ordering::Relaxed),
        }
    }

    /// Snapshot and zero every counter, one swap per counter.
    pub fn take(&self) -> CodecStatsSnapshot {
        CodecStatsSnapshot {
            encode_count: self.encode_count.swap(0, Ordering::Relaxed),
            encode_compressed: self.encode_compressed.swap(0, Ordering::Relaxed),
            bytes_original: self.bytes_original.swap(0, Ordering::Relaxed),
            bytes_stored: self.bytes_stored.swap(0, Ordering::Relaxed),
            decode_count: self.decode_count.swap(0, Ordering::Relaxed),
            decode_compressed: self.decode_compressed.swap(0, Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        let _ = self.take();
    }
}

impl CodecObserver for CodecStats {
    fn on_encode(&self, compressed: bool, original_len: usize, stored_len: usize) {
        self.add_encode(compressed, original_len, stored_len);
    }

    fn on_decode(&self, compressed: bool, _original_len: usize) {
        self.add_decode(compressed);
    }
}
