//! # bmpveil library
//!
//! Core logic for the bmpveil tool: a codec that hides arbitrary bytes in
//! the two least-significant bits of each color byte of an uncompressed
//! 24-bit BMP image, plus the simple byte ciphers and the file-zeroing
//! mode that ship alongside it.

// Declare every module the library contains.

pub mod bitmap;
pub mod bits;
pub mod cipher;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;
pub mod walker;
