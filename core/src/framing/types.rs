use thiserror::Error;

use crate::constants::{COMPRESSED_HEADER_LEN, UNCOMPRESSED_HEADER_LEN};

/// Frame variant, decided by the first byte alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Uncompressed,
    Compressed,
}

impl FrameKind {
    /// High bit set (negative as `i8`) marks an uncompressed frame.
    #[inline(always)]
    pub const fn from_lead_byte(b: u8) -> Self {
        if (b as i8) < 0 {
            FrameKind::Uncompressed
        } else {
            FrameKind::Compressed
        }
    }

    #[inline(always)]
    pub const fn header_len(self) -> usize {
        match self {
            FrameKind::Uncompressed => UNCOMPRESSED_HEADER_LEN,
            FrameKind::Compressed => COMPRESSED_HEADER_LEN,
        }
    }

    pub const fn is_compressed(self) -> bool {
        matches!(self, FrameKind::Compressed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FrameKind::Uncompressed => "uncompressed",
            FrameKind::Compressed => "compressed",
        }
    }
}

/// Parsed frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHeader {
    /// `[0xFF]`
    Uncompressed,
    /// `[u32 BE original length]`
    Compressed { original_len: u32 },
}

impl FrameHeader {
    pub const fn kind(&self) -> FrameKind {
        match self {
            FrameHeader::Uncompressed => FrameKind::Uncompressed,
            FrameHeader::Compressed { .. } => FrameKind::Compressed,
        }
    }

    /// Header width in bytes.
    pub const fn len(&self) -> usize {
        self.kind().header_len()
    }

    /// Original length recorded in the header; `None` for uncompressed frames,
    /// whose payload length is the original length.
    pub const fn original_len(&self) -> Option<usize> {
        match self {
            FrameHeader::Uncompressed => None,
            FrameHeader::Compressed { original_len } => Some(*original_len as usize),
        }
    }
}

/// Borrowed view of a frame: parsed header plus the bytes after it.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub header: FrameHeader,
    pub payload: &'a [u8],
}

impl<'a> FrameView<'a> {
    /// Length of the value before compression.
    pub fn original_len(&self) -> usize {
        self.header.original_len().unwrap_or(self.payload.len())
    }

    pub fn stored_len(&self) -> usize {
        self.header.len() + self.payload.len()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("truncated frame: {have} bytes, header needs {need}")]
    Truncated { have: usize, need: usize },

    #[error("empty frame")]
    Empty,
}
