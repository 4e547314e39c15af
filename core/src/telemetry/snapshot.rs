//! telemetry/snapshot.rs
//! Immutable copy of `CodecStats` with derived ratios.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecStatsSnapshot {
    pub encode_count: u64,
    pub encode_compressed: u64,
    pub bytes_original: u64,
    pub bytes_stored: u64,
    pub decode_count: u64,
    pub decode_compressed: u64,
}

impl CodecStatsSnapshot {
    /// `bytes_stored / bytes_original`; 0.0 when nothing was encoded.
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_original == 0 {
            return 0.0;
        }
        self.bytes_stored as f64 / self.bytes_original as f64
    }

    /// Fraction of original bytes saved. Negative when framing overhead
    /// outweighed compression.
    pub fn space_saving(&self) -> f64 {
        if self.bytes_original == 0 {
            return 0.0;
        }
        1.0 - self.compression_ratio()
    }

    /// Share of encodes that took the compressed branch.
    pub fn compressed_fraction(&self) -> f64 {
        if self.encode_count == 0 {
            return 0.0;
        }
        self.encode_compressed as f64 / self.encode_count as f64
    }

    pub fn merge(&mut self, other: &CodecStatsSnapshot) {
        self.encode_count += other.encode_count;
        self.encode_compressed += other.encode_compressed;
        self.bytes_original += other.bytes_original;
        self.bytes_stored += other.bytes_stored;
        self.decode_count += other.decode_count;
        self.decode_compressed += other.decode_compressed;
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl AddAssign for CodecStatsSnapshot {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
