//! Genesis block header fields fixed by chain configuration

use crate::codec::CompactBits;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Header version stamped on genesis blocks
pub const GENESIS_BLOCK_VERSION: u32 = 1;

/// Header fields of the first block of a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisHeader {
    /// Block version
    pub version: u32,
    /// Block creation time
    pub time: DateTime<Utc>,
    /// Difficulty target in compact form
    pub difficulty_target: CompactBits,
    /// Proof-of-work nonce
    pub nonce: u32,
}

impl GenesisHeader {
    /// Create a genesis header, stamping `target` into its compact difficulty field
    pub fn new(time: DateTime<Utc>, target: &BigInt) -> Self {
        let difficulty_target = CompactBits::from_target(target);
        log::debug!("Genesis difficulty target stamped as {}", difficulty_target);
        Self {
            version: GENESIS_BLOCK_VERSION,
            time,
            difficulty_target,
            nonce: 0,
        }
    }

    /// Full target expanded from the difficulty field
    pub fn target(&self) -> BigInt {
        self.difficulty_target.to_target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_compact_bits, EASIEST_DIFFICULTY_TARGET};

    #[test]
    fn test_genesis_stamps_compact_target() {
        let target = decode_compact_bits(EASIEST_DIFFICULTY_TARGET);
        let header = GenesisHeader::new(Utc::now(), &target);

        assert_eq!(header.difficulty_target, CompactBits(EASIEST_DIFFICULTY_TARGET));
        assert_eq!(header.target(), target);
        assert_eq!(header.version, GENESIS_BLOCK_VERSION);
    }

    #[test]
    fn test_genesis_target_is_truncated_to_mantissa() {
        // Bytes below the top three are dropped by the compact form
        let target = BigInt::from(0x1234_5678u64);
        let header = GenesisHeader::new(Utc::now(), &target);

        assert_eq!(header.difficulty_target, CompactBits(0x04123456));
        assert_eq!(header.target(), BigInt::from(0x1234_5600u64));
    }
}
