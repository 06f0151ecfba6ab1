//! # Command-line interface
//!
//! Defines the program's command-line structure with `clap`, including
//! every subcommand and its arguments. All user entry points into the
//! program are declared in this module.

use clap::Parser;
use std::path::PathBuf;

/// A command-line tool that hides arbitrary data in the two low bits of
/// uncompressed 24-bit BMP images, with simple byte-cipher and file-wiping
/// utilities on the side.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "A command-line tool that hides arbitrary data in the two low bits of uncompressed 24-bit BMP images, with simple byte-cipher and file-wiping utilities on the side."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// The available subcommands.
#[derive(Parser, Debug)]
pub enum Commands {
    /// Embed a payload file into an uncompressed 24-bit BMP image.
    Embed(EmbedArgs),

    /// Extract a previously embedded payload from a BMP image.
    Extract(ExtractArgs),

    /// Encrypt a file by XORing every byte with a fresh random keystream.
    Encrypt(EncryptArgs),

    /// Decrypt a file produced by 'encrypt', using its keymap file.
    Decrypt(DecryptArgs),

    /// Encrypt a file with a Vigenère-style byte cipher keyed by a text file.
    EncryptVig(VigenereArgs),

    /// Decrypt a file produced by 'encrypt-vig', using the same key file.
    DecryptVig(VigenereArgs),

    /// Overwrite a file's contents with zeroes, optionally deleting it after.
    Zero(ZeroArgs),
}

/// Arguments for the 'embed' command.
#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// Path of the carrier BMP image (24-bit, uncompressed).
    #[arg(short, long)]
    pub image: PathBuf,

    /// Path of the payload file to hide inside the image.
    #[arg(short, long)]
    pub payload: PathBuf,
}

/// Arguments for the 'extract' command.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Path of the BMP image carrying hidden data.
    #[arg(short, long)]
    pub image: PathBuf,

    /// Number of payload bytes to recover. The carrier stores no length
    /// header, so this must be supplied.
    #[arg(short, long)]
    pub count: usize,
}

/// Arguments for the 'encrypt' command.
#[derive(Parser, Debug)]
pub struct EncryptArgs {
    /// Path of the file to encrypt.
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Arguments for the 'decrypt' command.
#[derive(Parser, Debug)]
pub struct DecryptArgs {
    /// Path of the encrypted file.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Path of the keymap file written when the file was encrypted.
    #[arg(short, long)]
    pub keymap: PathBuf,
}

/// Arguments shared by the 'encrypt-vig' and 'decrypt-vig' commands.
#[derive(Parser, Debug)]
pub struct VigenereArgs {
    /// Path of the file to transform.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Path of an ASCII text file whose alphabetic bytes form the key.
    #[arg(short, long)]
    pub key: PathBuf,
}

/// Arguments for the 'zero' command.
#[derive(Parser, Debug)]
pub struct ZeroArgs {
    /// Path of the file to zero out. Its data is irreversibly destroyed.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Also delete the file after zeroing it.
    #[arg(long)]
    pub delete: bool,
}
