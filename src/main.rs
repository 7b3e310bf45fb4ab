//! Chain Codec CLI Application
//!
//! A command-line interface for the consensus numeric codecs.

use chain_codec::cli::{self, AppState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chaincodec")]
#[command(version = "0.1.0")]
#[command(about = "Consensus numeric codecs for a Bitcoin-style chain", long_about = None)]
struct Cli {
    /// Chain parameters file (JSON); defaults to the unit-test network
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compact difficulty bits
    Bits {
        #[command(subcommand)]
        action: BitsCommands,
    },

    /// MPI integer buffers
    Mpi {
        #[command(subcommand)]
        action: MpiCommands,
    },

    /// Reverse a hex buffer
    Reverse {
        /// Hex bytes
        hex: String,
    },

    /// Flip byte order inside each 4-byte word
    Dword {
        /// Hex bytes (length a multiple of 4)
        hex: String,

        /// Keep only this many bytes (a multiple of 4)
        #[arg(short, long)]
        trim: Option<usize>,
    },

    /// Most frequent value, largest on ties
    Mode {
        /// Values to reconcile
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Format a millisecond Unix timestamp
    Time {
        /// Milliseconds since the epoch
        #[arg(allow_negative_numbers = true)]
        millis: i64,
    },

    /// Show chain parameters
    Params {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum BitsCommands {
    /// Expand compact bits into a target
    Decode {
        /// Compact bits in hex (e.g. 0x1d00ffff)
        bits: String,
    },

    /// Pack a target into compact bits
    Encode {
        /// Target in decimal or 0x-prefixed hex
        #[arg(allow_hyphen_values = true)]
        target: String,
    },
}

#[derive(Subcommand)]
enum MpiCommands {
    /// Encode an integer
    Encode {
        /// Integer in decimal or 0x-prefixed hex
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Prepend the 4-byte length prefix
        #[arg(short, long)]
        length: bool,
    },

    /// Decode a hex buffer
    Decode {
        /// MPI bytes in hex
        hex: String,

        /// Buffer starts with the 4-byte length prefix
        #[arg(short, long)]
        length: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Chain parameters are built once here and passed down by reference
    let state = AppState::new(cli.config.as_deref())?;

    match cli.command {
        Commands::Bits { action } => match action {
            BitsCommands::Decode { bits } => {
                cli::cmd_bits_decode(&bits)?;
            }
            BitsCommands::Encode { target } => {
                cli::cmd_bits_encode(&state, &target)?;
            }
        },

        Commands::Mpi { action } => match action {
            MpiCommands::Encode { value, length } => {
                cli::cmd_mpi_encode(&value, length)?;
            }
            MpiCommands::Decode { hex, length } => {
                cli::cmd_mpi_decode(&hex, length)?;
            }
        },

        Commands::Reverse { hex } => {
            cli::cmd_reverse(&hex)?;
        }

        Commands::Dword { hex, trim } => {
            cli::cmd_dword(&hex, trim)?;
        }

        Commands::Mode { values } => {
            cli::cmd_mode(&values)?;
        }

        Commands::Time { millis } => {
            cli::cmd_time(millis)?;
        }

        Commands::Params { json } => {
            cli::cmd_params(&state, json)?;
        }
    }

    Ok(())
}
