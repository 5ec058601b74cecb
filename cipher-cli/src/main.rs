#![deny(missing_docs)]
//! A command-line interface for the classical cipher toolkit.

use cipher_core::config::DEFAULT_CONFIG_FILE;
use cipher_core::{CipherConfig, CipherKind, load_config, save_config};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use metadata::{CiphertextMetadata, metadata_path};
use std::fs;
use std::path::{Path, PathBuf};

mod metadata;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt with the fractionating Polybius cipher\ncipher-cli encrypt \"some text\"\n\n# Encrypt with a keyed grid and save the result with its metadata\ncipher-cli encrypt --key PORSCHE --input ./message.txt --output ./message.enc\n\n# Decrypt, verifying the ciphertext and key against the metadata\ncipher-cli decrypt --key PORSCHE --input ./message.enc --metadata ./message.enc.metadata.json\n\n# Use the Scytale cipher with 5 rows\ncipher-cli encrypt --cipher scytale --rows 5 \"plaintext message\"\n\n# Print a keyed grid\ncipher-cli grid --key PORSCHE"
)]
struct Cli {
    /// The path to the cipher configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a classical cipher
    Encrypt {
        #[command(flatten)]
        text: TextArgs,

        #[command(flatten)]
        cipher: CipherArgs,
    },
    /// Decrypt text with a classical cipher
    Decrypt {
        #[command(flatten)]
        text: TextArgs,

        #[command(flatten)]
        cipher: CipherArgs,

        /// Path to the ciphertext metadata file. When given, the ciphertext and key are verified against it.
        #[arg(long, value_name = "METADATA_FILE")]
        metadata: Option<PathBuf>,
    },
    /// Print the Polybius grid
    Grid {
        /// Keyword for the grid, overriding the configuration.
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
struct TextArgs {
    /// The text to process. If omitted, --input must be provided.
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    text: Option<String>,

    /// Path to a file holding the text to process.
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Path to the output file. If omitted, the result is printed.
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct CipherArgs {
    /// The cipher to use: atbash, polybius, square or scytale. Defaults to the configured one.
    #[arg(short, long, value_name = "CIPHER")]
    cipher: Option<CipherKind>,

    /// Keyword for the Polybius grid, overriding the configuration.
    #[arg(short, long)]
    key: Option<String>,

    /// Number of Scytale rows, overriding the configuration.
    #[arg(short, long)]
    rows: Option<usize>,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Show the effective configuration
    Show,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt { text, cipher } => {
            let (config, kind) = resolve_cipher(&cli.config, &cipher, None);
            let cipher = config.build(kind).unwrap_or_else(|e| {
                error!("Failed to configure the {kind} cipher: {e}");
                std::process::exit(1);
            });
            let plaintext = read_text(&text);

            info!("Encrypting {} characters with the {kind} cipher.", plaintext.len());
            let ciphertext = cipher.encrypt(&plaintext).unwrap_or_else(|e| {
                error!("Failed to encrypt: {e}");
                std::process::exit(1);
            });

            if let Some(output) = &text.output {
                write_text(output, &ciphertext);
                let metadata_path = metadata_path(output);
                let metadata = CiphertextMetadata::describe(kind, cipher.as_ref(), &ciphertext);
                if let Err(e) = metadata.save(&metadata_path) {
                    error!("Failed to write metadata file: {e}");
                    std::process::exit(1);
                }
                println!(
                    "Successfully encrypted {} letters to '{}'",
                    ciphertext.len(),
                    output.display()
                );
                println!("Decryption metadata saved to '{}'", metadata_path.display());
            } else {
                println!("{ciphertext}");
            }
        }
        Commands::Decrypt {
            text,
            cipher,
            metadata,
        } => {
            let metadata = metadata.map(|path| {
                CiphertextMetadata::load(&path).unwrap_or_else(|e| {
                    error!("Failed to read metadata file '{}': {e}", path.display());
                    std::process::exit(1);
                })
            });
            let (config, kind) =
                resolve_cipher(&cli.config, &cipher, metadata.as_ref().map(|m| m.cipher));
            let cipher = config.build(kind).unwrap_or_else(|e| {
                error!("Failed to configure the {kind} cipher: {e}");
                std::process::exit(1);
            });
            let ciphertext = read_text(&text);

            if let Some(metadata) = &metadata {
                if let Err(e) = metadata.verify(cipher.as_ref(), &ciphertext) {
                    error!("{e} Aborting.");
                    std::process::exit(1);
                }
                info!("Ciphertext and key match the metadata.");
            }

            info!("Decrypting {} characters with the {kind} cipher.", ciphertext.len());
            let plaintext = cipher.decrypt(&ciphertext).unwrap_or_else(|e| {
                error!("Failed to decrypt: {e}");
                std::process::exit(1);
            });

            if let Some(output) = &text.output {
                write_text(output, &plaintext);
                println!(
                    "Successfully decrypted {} letters to '{}'",
                    plaintext.len(),
                    output.display()
                );
            } else {
                println!("{plaintext}");
            }
        }
        Commands::Grid { key } => {
            let mut config = load(&cli.config);
            if key.is_some() {
                config.polybius.key = key;
            }
            let grid = config.polybius.grid().unwrap_or_else(|e| {
                error!("Failed to build the grid: {e}");
                std::process::exit(1);
            });
            print!("{grid}");
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init { force } => {
                if cli.config.exists() && !force {
                    error!(
                        "Configuration file '{}' already exists. Use --force to overwrite it.",
                        cli.config.display()
                    );
                    std::process::exit(1);
                }
                if let Err(e) = save_config(&cli.config, &CipherConfig::default()) {
                    error!("Failed to write configuration file: {e}");
                    std::process::exit(1);
                }
                println!("Configuration written to '{}'", cli.config.display());
            }
            ConfigCommands::Show => {
                let config = load(&cli.config);
                let config_str = serde_json::to_string_pretty(&config).unwrap_or_else(|e| {
                    error!("Failed to serialize configuration: {e}");
                    std::process::exit(1);
                });
                println!("{config_str}");
            }
        },
    }
}

fn load(path: &Path) -> CipherConfig {
    load_config(path).unwrap_or_else(|e| {
        error!("Failed to load configuration '{}': {e}", path.display());
        std::process::exit(1);
    })
}

/// Applies command-line overrides to the configuration and picks the cipher.
///
/// A cipher recorded in metadata wins over the configured default, but must
/// agree with an explicit `--cipher`.
fn resolve_cipher(
    config_path: &Path,
    args: &CipherArgs,
    recorded: Option<CipherKind>,
) -> (CipherConfig, CipherKind) {
    let mut config = load(config_path);
    if let Some(key) = &args.key {
        config.polybius.key = Some(key.clone());
    }
    if let Some(rows) = args.rows {
        config.scytale.rows = rows;
    }

    let kind = match (args.cipher, recorded) {
        (Some(requested), Some(recorded)) if requested != recorded => {
            error!("The metadata was written by the {recorded} cipher, not {requested}.");
            std::process::exit(1);
        }
        (Some(kind), _) | (None, Some(kind)) => kind,
        (None, None) => config.cipher,
    };
    (config, kind)
}

fn read_text(args: &TextArgs) -> String {
    match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(input)) => fs::read_to_string(input)
            .map(|content| content.trim_end_matches(['\r', '\n']).to_string())
            .unwrap_or_else(|e| {
                error!("Failed to read input file '{}': {e}", input.display());
                std::process::exit(1);
            }),
        (None, None) => {
            error!("No text given. Pass the text directly or use --input.");
            std::process::exit(1);
        }
    }
}

fn write_text(path: &Path, text: &str) {
    if let Err(e) = fs::write(path, format!("{text}\n")) {
        error!("Failed to write output file '{}': {e}", path.display());
        std::process::exit(1);
    }
}
