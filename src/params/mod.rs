//! Chain parameters
//!
//! Static per-network configuration consumed by the codecs. A `ChainParams`
//! value is built once at startup and handed to consumers by reference.

pub mod chain;
pub mod genesis;

pub use chain::{ChainParams, ParamsError, ID_UNITTESTNET};
pub use genesis::{GenesisHeader, GENESIS_BLOCK_VERSION};
