//! config.rs
//! Codec configuration, fixed for the lifetime of a codec.
use serde::{Deserialize, Serialize};

use crate::compression::CompressionMode;
use crate::constants::DEFAULT_COMPRESS_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Encoder backend. Decoding is the same for every mode.
    pub mode: CompressionMode,
    /// Payloads strictly shorter than this are stored uncompressed.
    pub compress_threshold: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            mode: CompressionMode::Fast,
            compress_threshold: DEFAULT_COMPRESS_THRESHOLD,
        }
    }
}

impl CodecConfig {
    pub fn new(mode: CompressionMode, compress_threshold: usize) -> Self {
        Self { mode, compress_threshold }
    }

    pub fn with_mode(mut self, mode: CompressionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_threshold(mut self, compress_threshold: usize) -> Self {
        self.compress_threshold = compress_threshold;
        self
    }

    /// Whether a payload of `len` bytes takes the compressed branch.
    #[inline]
    pub fn should_compress(&self, len: usize) -> bool {
        len >= self.compress_threshold
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::CompressionError;

    #[test]
    fn threshold_is_strict_less_than() {
        let cfg = CodecConfig::default().with_threshold(10);
        assert!(!cfg.should_compress(9));
        assert!(cfg.should_compress(10));
        assert!(CodecConfig::default().with_threshold(0).should_compress(0));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg = CodecConfig::from_json(r#"{ "mode": "high-ratio" }"#).unwrap();
        assert_eq!(cfg.mode, CompressionMode::HighRatio);
        assert_eq!(cfg.compress_threshold, DEFAULT_COMPRESS_THRESHOLD);

        let cfg = CodecConfig::from_json(r#"{ "compress_threshold": 64 }"#).unwrap();
        assert_eq!(cfg, CodecConfig::new(CompressionMode::Fast, 64));
    }

    #[test]
    fn mode_parses_from_plain_strings() {
        assert_eq!("fast".parse::<CompressionMode>(), Ok(CompressionMode::Fast));
        assert_eq!("High-Ratio".parse::<CompressionMode>(), Ok(CompressionMode::HighRatio));
        assert_eq!("high_ratio".parse::<CompressionMode>(), Ok(CompressionMode::HighRatio));
        assert_eq!(CompressionMode::HighRatio.to_string().parse::<CompressionMode>(), Ok(CompressionMode::HighRatio));
        assert_eq!(
            "turbo".parse::<CompressionMode>(),
            Err(CompressionError::UnknownMode("turbo".to_string()))
        );
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(CodecConfig::from_json(r#"{ "mode": "turbo" }"#).is_err());
    }
}
