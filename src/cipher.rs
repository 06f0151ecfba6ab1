//! # Byte ciphers
//!
//! The straight linear transforms that sit next to the bitmap codec: an
//! XOR with a freshly generated random keystream, and a Vigenère-style
//! XOR keyed by the alphabetic bytes of a key file. Same length in, same
//! length out; no format awareness.

use rand::RngCore;
use std::io::{self, ErrorKind};

/// Ciphertext together with the keystream that produced it.
pub struct XorOutput {
    pub ciphertext: Vec<u8>,
    pub keymap: Vec<u8>,
}

/// XORs every byte of `plain` with a fresh random byte. The keymap is
/// returned alongside the ciphertext; without it the ciphertext is
/// unrecoverable.
pub fn encrypt_random(plain: &[u8]) -> XorOutput {
    let mut keymap = vec![0u8; plain.len()];
    rand::rng().fill_bytes(&mut keymap);

    let ciphertext = plain.iter().zip(&keymap).map(|(&b, &k)| b ^ k).collect();

    XorOutput { ciphertext, keymap }
}

/// Reverses [`encrypt_random`] given the matching keymap.
///
/// # Errors
///
/// Fails when the keymap's length differs from the ciphertext's, which
/// means it was produced for some other file.
pub fn decrypt_random(cipher: &[u8], keymap: &[u8]) -> Result<Vec<u8>, io::Error> {
    if cipher.len() != keymap.len() {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "The keymap file doesn't belong to this encrypted file.",
        ));
    }

    Ok(cipher.iter().zip(keymap).map(|(&b, &k)| b ^ k).collect())
}

/// Vigenère-style transform: XORs `data` with the alphabetic bytes of
/// `key`, cycled. Non-alphabetic key bytes are skipped. Applying the
/// transform twice with the same key is the identity, so this single
/// function both encrypts and decrypts.
///
/// # Errors
///
/// Fails when the key contains no alphabetic bytes at all, since there
/// would be nothing to cycle.
pub fn vigenere(data: &[u8], key: &[u8]) -> Result<Vec<u8>, io::Error> {
    let letters: Vec<u8> = key
        .iter()
        .copied()
        .filter(|byte| byte.is_ascii_alphabetic())
        .collect();

    if letters.is_empty() {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "The key file contains no alphabetic characters.",
        ));
    }

    Ok(data
        .iter()
        .zip(letters.iter().cycle())
        .map(|(&b, &k)| b ^ k)
        .collect())
}
