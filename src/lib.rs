//! Chain Codec: consensus-critical numeric encodings for a Bitcoin-style chain
//!
//! This crate provides:
//! - Compact "difficulty bits" encoding of proof-of-work targets
//! - Sign-and-magnitude MPI encoding of arbitrary-precision integers
//! - Byte-order reversal for hashes and multi-word header fields
//! - Most-frequent value selection for reconciling peer-reported values
//! - Explicit, immutable chain parameters
//!
//! # Example
//!
//! ```rust
//! use chain_codec::codec::{decode_compact_bits, encode_compact_bits, decode_mpi, encode_mpi};
//! use chain_codec::util::max_of_most_freq;
//!
//! let target = decode_compact_bits(0x05123456);
//! assert_eq!(encode_compact_bits(&target), 0x05123456);
//!
//! let buf = encode_mpi(&(-target.clone()), true);
//! assert_eq!(decode_mpi(&buf, true).unwrap(), -target);
//!
//! assert_eq!(max_of_most_freq([1i64, 1, 2, 2]), 2);
//! ```

pub mod cli;
pub mod codec;
pub mod params;
pub mod util;

// Re-export commonly used types
pub use codec::{
    decode_compact_bits, decode_mpi, encode_compact_bits, encode_mpi, CodecError, CompactBits,
    EASIEST_DIFFICULTY_TARGET,
};
pub use params::{ChainParams, GenesisHeader, ParamsError};
pub use util::{max_of_most_freq, reverse_bytes, reverse_dword_bytes};
