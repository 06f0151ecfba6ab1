//! # Embedder and extractor
//!
//! The codec core: spreads each payload byte over the two low bits of 4
//! consecutive color bytes on the way in, and collects them back on the
//! way out. Headers, padding bytes and everything past the last touched
//! color byte are carried through byte-for-byte.

use crate::bitmap::parse_headers;
use crate::bits::{from_bits, to_bits};
use crate::constants::{COLOR_BYTES_PER_PAYLOAD_BYTE, HEADER_SIZE};
use crate::error::BmpError;
use crate::walker::PixelWalker;

const GROUP: u32 = COLOR_BYTES_PER_PAYLOAD_BYTE as u32;

/// Maximum payload length the embed side accepts for a carrier of the
/// given recorded file size: `(file_size - 54) / 4 - 9`.
///
/// Evaluated in wrapping u32 arithmetic on purpose: for carriers smaller
/// than the margins the subtraction wraps and the bound goes slack
/// instead of rejecting. Carriers already in the wild were produced
/// against this exact formula, so it is kept as-is.
pub fn embed_capacity(file_size: u32) -> u32 {
    (file_size.wrapping_sub(HEADER_SIZE as u32) / GROUP).wrapping_sub(9)
}

/// Maximum byte count the extract side accepts: `file_size / 4 - 54`.
///
/// Deliberately not the same bound as [`embed_capacity`]; the two
/// formulas are structurally different and neither is normalized to
/// match the other, again for compatibility with existing carriers.
/// Same wrapping u32 arithmetic as the embed side.
pub fn extract_capacity(file_size: u32) -> u32 {
    (file_size / GROUP).wrapping_sub(HEADER_SIZE as u32)
}

/// Embeds `payload` into a copy of `container`, returning the new carrier.
///
/// Each payload byte becomes four 2-bit groups, most significant pair
/// first, each overwriting the two low bits of the next color byte in
/// on-disk order. Padding bytes and all bytes beyond the embedded region
/// are left exactly as they were. The input is never mutated.
///
/// # Errors
///
/// Any header validation error from [`parse_headers`], or
/// [`BmpError::CapacityExceeded`] when the payload does not fit, either
/// by the capacity formula or because the color byte stream runs out
/// first (possible on padding-heavy carriers, where the formula counts
/// padding as usable space).
pub fn embed(container: &[u8], payload: &[u8]) -> Result<Vec<u8>, BmpError> {
    let headers = parse_headers(container)?;

    let capacity = embed_capacity(headers.file_size);
    if payload.len() as u64 > u64::from(capacity) {
        return Err(BmpError::CapacityExceeded {
            requested: payload.len() as u64,
            capacity: u64::from(capacity),
        });
    }

    let mut doctored = container.to_vec();
    let mut walker = PixelWalker::new(&headers, container.len());

    for &byte in payload {
        let bits = to_bits(byte);
        for pair in bits.chunks_exact(2) {
            let offset = walker.next_color().ok_or(BmpError::CapacityExceeded {
                requested: payload.len() as u64,
                capacity: u64::from(capacity),
            })?;
            doctored[offset] = (doctored[offset] & 0xFC) | (pair[0] << 1) | pair[1];
        }
    }

    Ok(doctored)
}

/// Recovers `count` payload bytes from a carrier produced by [`embed`].
///
/// Walks the same color byte stream as embedding, takes the two low bits
/// of each color byte and accumulates 4 pairs into each output byte.
/// Stops after exactly `count` bytes.
///
/// # Errors
///
/// Any header validation error from [`parse_headers`], or
/// [`BmpError::CapacityExceeded`] when `count` exceeds the carrier's
/// bound or the color byte stream ends early.
pub fn extract(container: &[u8], count: usize) -> Result<Vec<u8>, BmpError> {
    let headers = parse_headers(container)?;

    let capacity = extract_capacity(headers.file_size);
    if count as u64 > u64::from(capacity) {
        return Err(BmpError::CapacityExceeded {
            requested: count as u64,
            capacity: u64::from(capacity),
        });
    }

    let mut walker = PixelWalker::new(&headers, container.len());
    let mut payload = Vec::with_capacity(count);

    for _ in 0..count {
        let mut bits = [0u8; 8];
        for pair in bits.chunks_exact_mut(2) {
            let offset = walker.next_color().ok_or(BmpError::CapacityExceeded {
                requested: count as u64,
                capacity: u64::from(capacity),
            })?;
            let color = to_bits(container[offset]);
            pair[0] = color[6];
            pair[1] = color[7];
        }
        payload.push(from_bits(&bits)?);
    }

    Ok(payload)
}
