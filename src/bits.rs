//! # Bit-group codec
//!
//! The sole primitives for moving between a byte and its bit
//! representation. Embedding always works on 2-bit groups taken from the
//! arrays these functions produce, so every bit here is most-significant
//! first.

use crate::error::BmpError;

/// Splits a byte into its 8 bits, most significant first.
/// Every element of the result is 0 or 1.
pub fn to_bits(byte: u8) -> [u8; 8] {
    let mut bits = [0u8; 8];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> (7 - i)) & 1;
    }
    bits
}

/// Reassembles a byte from 8 bits, most significant first.
///
/// # Errors
///
/// [`BmpError::InvalidBitCount`] if `bits` is not exactly 8 elements long.
pub fn from_bits(bits: &[u8]) -> Result<u8, BmpError> {
    if bits.len() != 8 {
        return Err(BmpError::InvalidBitCount { len: bits.len() });
    }

    Ok(bits.iter().fold(0, |acc, &bit| (acc << 1) | (bit & 1)))
}
