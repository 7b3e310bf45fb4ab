//! Consensus numeric codecs
//!
//! This module provides:
//! - Compact "difficulty bits" encoding of proof-of-work targets
//! - Sign-and-magnitude MPI encoding of arbitrary-precision integers

pub mod compact;
pub mod mpi;

use thiserror::Error;

pub use compact::{
    decode_compact_bits, encode_compact_bits, CompactBits, COMPACT_SIGN_BIT,
    EASIEST_DIFFICULTY_TARGET,
};
pub use mpi::{decode_mpi, encode_mpi, MPI_LENGTH_PREFIX_SIZE};

/// Errors raised while decoding or reshaping consensus byte buffers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("MPI payload truncated: declared {declared} bytes, {available} available")]
    Truncated { declared: usize, available: usize },
    #[error("MPI buffer too short for length prefix: {len} bytes")]
    MissingLengthPrefix { len: usize },
    #[error("Buffer length {len} is not a multiple of 4")]
    Misaligned { len: usize },
}
