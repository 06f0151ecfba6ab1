//! # BMP container headers
//!
//! Typed view of the two fixed headers that precede pixel data, plus the
//! scanline padding rule. Fields are decoded at explicit little-endian
//! offsets from the raw byte buffer rather than through a packed struct,
//! so the layout never depends on the platform.

use crate::constants::{BMP_SIGNATURE, HEADER_SIZE};
use crate::error::BmpError;

/// The header fields the codec consumes. Everything else in the headers
/// is copied through to the output untouched.
#[derive(Debug, Clone, Copy)]
pub struct BmpHeaders {
    /// Total file size as recorded in the file header.
    pub file_size: u32,
    /// Offset of the pixel data. Informational.
    pub pixel_offset: u32,
    /// Pixel width. Drives the padding and row-capacity math.
    pub width: i32,
    /// Pixel height. The sign encodes row orientation; never interpreted.
    pub height: i32,
    /// Bits per pixel. Must be 24.
    pub bit_depth: u16,
    /// Compression method. Must be 0.
    pub compression: u32,
}

/// Parses and validates both fixed headers from the start of `raw`.
///
/// Checks run in a fixed order: buffer length, then signature, then bit
/// depth, then compression. The first violated rule decides the error.
///
/// # Errors
///
/// [`BmpError::HeaderTruncated`], [`BmpError::NotABitmap`],
/// [`BmpError::UnsupportedBitDepth`] or [`BmpError::CompressedNotSupported`],
/// each carrying the offending field value.
pub fn parse_headers(raw: &[u8]) -> Result<BmpHeaders, BmpError> {
    if raw.len() < HEADER_SIZE {
        return Err(BmpError::HeaderTruncated { len: raw.len() });
    }

    if raw[0..2] != BMP_SIGNATURE {
        return Err(BmpError::NotABitmap {
            signature: [raw[0], raw[1]],
        });
    }

    let headers = BmpHeaders {
        file_size: read_u32(raw, 2),
        pixel_offset: read_u32(raw, 10),
        width: read_i32(raw, 18),
        height: read_i32(raw, 22),
        bit_depth: read_u16(raw, 28),
        compression: read_u32(raw, 30),
    };

    if headers.bit_depth != 24 {
        return Err(BmpError::UnsupportedBitDepth {
            depth: headers.bit_depth,
        });
    }

    if headers.compression != 0 {
        return Err(BmpError::CompressedNotSupported {
            method: headers.compression,
        });
    }

    Ok(headers)
}

/// Number of filler bytes appended to each scanline so its total length
/// is a multiple of 4: `(4 - (width * 3) % 4) % 4`. Always in `0..=3`.
///
/// Both embedding and extraction compute this once per operation and
/// reuse the value for every row.
pub fn row_padding(width: i32) -> usize {
    let row = width.unsigned_abs() as usize * 3;
    (4 - row % 4) % 4
}

fn read_u16(raw: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([raw[at], raw[at + 1]])
}

fn read_u32(raw: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([raw[at], raw[at + 1], raw[at + 2], raw[at + 3]])
}

fn read_i32(raw: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([raw[at], raw[at + 1], raw[at + 2], raw[at + 3]])
}
