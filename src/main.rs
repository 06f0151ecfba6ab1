use clap::Parser;

use bmpveil::{
    cli::{Cli, Commands},
    handler::{
        handle_decrypt, handle_decrypt_vig, handle_embed, handle_encrypt, handle_encrypt_vig,
        handle_extract, handle_zero,
    },
};

/// The program's main entry point
///
/// Parses the command-line arguments and dispatches execution to the
/// handler for whichever subcommand was given
fn main() -> anyhow::Result<()> {
    // Parse the command-line arguments
    let cli = Cli::parse();

    // Call the matching handler for the subcommand
    match cli.command {
        Commands::Embed(args) => handle_embed(args),
        Commands::Extract(args) => handle_extract(args),
        Commands::Encrypt(args) => handle_encrypt(args),
        Commands::Decrypt(args) => handle_decrypt(args),
        Commands::EncryptVig(args) => handle_encrypt_vig(args),
        Commands::DecryptVig(args) => handle_decrypt_vig(args),
        Commands::Zero(args) => handle_zero(args),
    }
}
