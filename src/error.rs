//! # Error types
//!
//! [`BmpError`] covers every way a carrier image can be rejected. All of
//! these are detected before a single output byte is written.

use std::fmt;

/// Errors raised while validating or walking a BMP carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BmpError {
    /// The file is too short to contain both fixed headers.
    HeaderTruncated { len: usize },
    /// The signature does not match the BMP magic (`BM`).
    NotABitmap { signature: [u8; 2] },
    /// The bit-depth field is something other than 24.
    UnsupportedBitDepth { depth: u16 },
    /// The compression field is something other than 0 (uncompressed).
    CompressedNotSupported { method: u32 },
    /// The payload (or requested byte count) exceeds what the carrier holds.
    CapacityExceeded { requested: u64, capacity: u64 },
    /// A slice passed to [`crate::bits::from_bits`] was not exactly 8 bits.
    InvalidBitCount { len: usize },
}

impl fmt::Display for BmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderTruncated { len } => {
                write!(f, "file is {len} bytes, shorter than the 54-byte BMP headers")
            }
            Self::NotABitmap { signature } => write!(
                f,
                "bad signature {:02x} {:02x}, expected 'BM'",
                signature[0], signature[1]
            ),
            Self::UnsupportedBitDepth { depth } => {
                write!(f, "bit depth is {depth}, only 24-bit bitmaps are supported")
            }
            Self::CompressedNotSupported { method } => write!(
                f,
                "compression method is {method}, only uncompressed (0) bitmaps are supported"
            ),
            Self::CapacityExceeded { requested, capacity } => write!(
                f,
                "{requested} bytes requested but the image holds at most {capacity}"
            ),
            Self::InvalidBitCount { len } => {
                write!(f, "expected exactly 8 bits, got {len}")
            }
        }
    }
}

impl std::error::Error for BmpError {}
