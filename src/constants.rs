/// Size in bytes of the BMP file header (signature, file size, reserved
/// fields, pixel-data offset).
pub const FILE_HEADER_SIZE: usize = 14;

/// Size in bytes of the BMP info header (dimensions, bit depth,
/// compression method and the rest).
pub const INFO_HEADER_SIZE: usize = 40;

/// Combined size of both fixed headers. Pixel data starts at this offset.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// The two-byte signature every BMP file begins with.
pub const BMP_SIGNATURE: [u8; 2] = *b"BM";

/// Number of color bytes each payload byte is spread over.
/// A byte is 8 bits and every color byte carries 2 of them, so 8 / 2 = 4.
pub const COLOR_BYTES_PER_PAYLOAD_BYTE: usize = 4;

/// Filename prefix for carriers and ciphertexts produced by the encode modes.
pub const ENCRYPTED_PREFIX: &str = "encrypted_";

/// Filename prefix for files recovered by the decode modes.
pub const DECRYPTED_PREFIX: &str = "decrypted_";

/// Filename prefix for the keystream file written by the XOR mode.
pub const KEYMAP_PREFIX: &str = "keymap_";
