//! Command-line interface
//!
//! Handlers behind the `chaincodec` binary.

pub mod commands;

pub use commands::{
    cmd_bits_decode, cmd_bits_encode, cmd_dword, cmd_mode, cmd_mpi_decode, cmd_mpi_encode,
    cmd_params, cmd_reverse, cmd_time, parse_int, AppState, CliResult,
};
