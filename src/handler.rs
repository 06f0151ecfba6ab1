//! # Command handling logic
//!
//! High-level business logic for every subcommand. This module wires file
//! I/O to the core codec and cipher routines and reports results back to
//! the user.

use crate::cipher::{decrypt_random, encrypt_random, vigenere};
use crate::cli::{DecryptArgs, EmbedArgs, EncryptArgs, ExtractArgs, VigenereArgs, ZeroArgs};
use crate::constants::{DECRYPTED_PREFIX, ENCRYPTED_PREFIX, KEYMAP_PREFIX};
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Builds an output path by prefixing the input's file name, keeping the
/// file in the same directory. Every mode derives its output names this way.
fn prefixed_path(path: &Path, prefix: &str) -> Result<PathBuf> {
    let name = path.file_name().with_context(|| {
        format!(
            "Path has no file name: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    Ok(path.with_file_name(format!("{}{}", prefix, name.to_string_lossy())))
}

/// Handles the 'embed' command.
///
/// Reads the carrier image and the payload file, embeds the payload into
/// the two low bits of the carrier's color bytes, and writes the result
/// next to the carrier with an `encrypted_` name prefix.
///
/// # Arguments
///
/// * `args` - The `EmbedArgs` struct holding both input paths.
///
/// # Errors
///
/// An error is returned if any of the following happens:
/// * The carrier image or the payload file cannot be read.
/// * The carrier is not a valid, uncompressed, 24-bit BMP.
/// * The payload does not fit in the carrier.
/// * The output image cannot be written.
pub fn handle_embed(args: EmbedArgs) -> Result<()> {
    let container = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = fs::read(&args.payload).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.payload.to_string_lossy().red().bold()
        )
    })?;

    let doctored = embed(&container, &payload).with_context(|| {
        format!(
            "Cannot embed {} into {}",
            args.payload.to_string_lossy().red().bold(),
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let dest = prefixed_path(&args.image, ENCRYPTED_PREFIX)?;
    fs::write(&dest, doctored).with_context(|| {
        format!(
            "Unable to write output image: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{} bytes have been embedded and saved: {}",
        payload.len().to_string().green().bold(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Handles the 'extract' command.
///
/// Reads the carrier image, recovers the requested number of payload
/// bytes from the low bits of its color bytes, and writes them next to
/// the carrier with a `decrypted_` name prefix.
///
/// # Arguments
///
/// * `args` - The `ExtractArgs` struct holding the image path and the
///   number of bytes to recover.
///
/// # Errors
///
/// An error is returned if any of the following happens:
/// * The carrier image cannot be read.
/// * The carrier is not a valid, uncompressed, 24-bit BMP.
/// * The requested byte count exceeds the carrier's capacity.
/// * The output file cannot be written.
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let container = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = extract(&container, args.count).with_context(|| {
        format!(
            "Cannot extract {} bytes from {}",
            args.count.to_string().red().bold(),
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let dest = prefixed_path(&args.image, DECRYPTED_PREFIX)?;
    fs::write(&dest, payload).with_context(|| {
        format!(
            "Unable to write output file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{} bytes have been extracted into the file: {}",
        args.count.to_string().green().bold(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Handles the 'encrypt' command.
///
/// XORs the file with a freshly generated random keystream and writes two
/// files next to it: the ciphertext (`encrypted_` prefix) and the
/// keystream (`keymap_` prefix). Both are required for decryption.
///
/// # Errors
///
/// An error is returned if the input cannot be read or either output
/// cannot be written.
pub fn handle_encrypt(args: EncryptArgs) -> Result<()> {
    let plain = fs::read(&args.file).with_context(|| {
        format!(
            "Unable to read file: {}",
            args.file.to_string_lossy().red().bold()
        )
    })?;

    let output = encrypt_random(&plain);

    let enc_path = prefixed_path(&args.file, ENCRYPTED_PREFIX)?;
    let key_path = prefixed_path(&args.file, KEYMAP_PREFIX)?;

    fs::write(&enc_path, &output.ciphertext).with_context(|| {
        format!(
            "Unable to write encrypted file: {}",
            enc_path.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&key_path, &output.keymap).with_context(|| {
        format!(
            "Unable to write keymap file: {}",
            key_path.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "Encryption completed.\nEncrypted file: {}\nKeymap file: {}",
        enc_path.to_string_lossy().green().bold(),
        key_path.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Handles the 'decrypt' command.
///
/// XORs the ciphertext with its keymap and writes the plaintext next to
/// it with a `decrypted_` name prefix.
///
/// # Errors
///
/// An error is returned if either input cannot be read, the keymap does
/// not match the ciphertext's length, or the output cannot be written.
pub fn handle_decrypt(args: DecryptArgs) -> Result<()> {
    let cipher = fs::read(&args.file).with_context(|| {
        format!(
            "Unable to read encrypted file: {}",
            args.file.to_string_lossy().red().bold()
        )
    })?;

    let keymap = fs::read(&args.keymap).with_context(|| {
        format!(
            "Unable to read keymap file: {}",
            args.keymap.to_string_lossy().red().bold()
        )
    })?;

    let plain = decrypt_random(&cipher, &keymap).with_context(|| {
        format!(
            "Cannot decrypt {} with keymap {}",
            args.file.to_string_lossy().red().bold(),
            args.keymap.to_string_lossy().red().bold()
        )
    })?;

    let dest = prefixed_path(&args.file, DECRYPTED_PREFIX)?;
    fs::write(&dest, plain).with_context(|| {
        format!(
            "Unable to write decrypted file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "File decrypted successfully.\nDecrypted file: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Handles the 'encrypt-vig' command.
pub fn handle_encrypt_vig(args: VigenereArgs) -> Result<()> {
    let dest = run_vigenere(&args, ENCRYPTED_PREFIX)?;

    println!(
        "Encryption completed.\nEncrypted file: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Handles the 'decrypt-vig' command. The transform is its own inverse,
/// so this only differs from encryption in the output name.
pub fn handle_decrypt_vig(args: VigenereArgs) -> Result<()> {
    let dest = run_vigenere(&args, DECRYPTED_PREFIX)?;

    println!(
        "File decrypted successfully.\nDecrypted file: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Applies the Vigenère-style transform to a file and writes the result
/// under the given name prefix, returning the output path.
fn run_vigenere(args: &VigenereArgs, prefix: &str) -> Result<PathBuf> {
    let data = fs::read(&args.file).with_context(|| {
        format!(
            "Unable to read file: {}",
            args.file.to_string_lossy().red().bold()
        )
    })?;

    let key = fs::read(&args.key).with_context(|| {
        format!(
            "Unable to read key file: {}",
            args.key.to_string_lossy().red().bold()
        )
    })?;

    let transformed = vigenere(&data, &key).with_context(|| {
        format!(
            "Cannot transform {} with key {}",
            args.file.to_string_lossy().red().bold(),
            args.key.to_string_lossy().red().bold()
        )
    })?;

    let dest = prefixed_path(&args.file, prefix)?;
    fs::write(&dest, transformed).with_context(|| {
        format!(
            "Unable to write output file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    Ok(dest)
}

/// Handles the 'zero' command.
///
/// Overwrites every byte of the file with zeroes in place (the file is
/// opened without truncation so the same region is rewritten), syncs the
/// result to disk and, when `--delete` was given, removes the file.
///
/// # Errors
///
/// An error is returned if the file cannot be opened for writing, the
/// overwrite or sync fails, or the deletion fails.
pub fn handle_zero(args: ZeroArgs) -> Result<()> {
    let len = fs::metadata(&args.file)
        .with_context(|| {
            format!(
                "Unable to inspect file: {}",
                args.file.to_string_lossy().red().bold()
            )
        })?
        .len();

    let mut file = fs::OpenOptions::new()
        .write(true)
        .open(&args.file)
        .with_context(|| {
            format!(
                "Unable to open file for zeroing: {}",
                args.file.to_string_lossy().red().bold()
            )
        })?;

    file.write_all(&vec![0u8; len as usize]).with_context(|| {
        format!(
            "Failed to zero out file: {}",
            args.file.to_string_lossy().red().bold()
        )
    })?;

    file.sync_all().with_context(|| {
        format!(
            "Failed to sync zeroed file to disk: {}",
            args.file.to_string_lossy().red().bold()
        )
    })?;
    drop(file);

    if args.delete {
        fs::remove_file(&args.file).with_context(|| {
            format!(
                "Failed to delete file after zeroing: {}",
                args.file.to_string_lossy().red().bold()
            )
        })?;

        println!(
            "{} has been zeroed out and deleted.",
            args.file.to_string_lossy().green().bold()
        );
    } else {
        println!(
            "{} has been zeroed out successfully.",
            args.file.to_string_lossy().green().bold()
        );
    }

    Ok(())
}
