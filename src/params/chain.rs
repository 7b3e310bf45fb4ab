//! Network parameters
//!
//! Loaded from JSON or built from a named preset. Hex is used for the max
//! target and the genesis public key so config files stay readable.

use crate::codec::EASIEST_DIFFICULTY_TARGET;
use crate::params::genesis::GenesisHeader;
use chrono::{DateTime, Utc};
use num_bigint::{BigInt, BigUint, Sign};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Identifier of the unit-test network
pub const ID_UNITTESTNET: &str = "org.bitcoin.unittest";

/// Max target of the unit-test network (`00ff..ff`, 32 bytes)
const UNITTEST_MAX_TARGET: [u8; 32] = {
    let mut bytes = [0xff; 32];
    bytes[0] = 0x00;
    bytes
};

/// Genesis public key of the unit-test network (compressed secp256k1)
const UNITTEST_GENESIS_PUB_KEY: [u8; 33] = [
    0x02, 0xe9, 0x2d, 0x6e, 0x24, 0x19, 0xab, 0xde, 0x2b, 0x53, 0xd6, 0x34, 0x07, 0x81, 0xee,
    0xc7, 0x34, 0xee, 0xec, 0xae, 0x7d, 0xeb, 0xdf, 0x50, 0x74, 0x31, 0x1d, 0xb6, 0x0c, 0x55,
    0x37, 0xdc, 0xce,
];

// =============================================================================
// Errors
// =============================================================================

/// Chain parameter loading errors
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

// =============================================================================
// Chain Parameters
// =============================================================================

/// Static configuration of one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    /// Network identifier
    pub id: String,
    /// Magic bytes that open every network message
    pub packet_magic: u32,
    /// Version byte of pay-to-pubkey-hash addresses
    pub address_header: u8,
    /// Version byte of pay-to-script-hash addresses
    pub p2sh_header: u8,
    /// Address version bytes accepted when parsing
    pub acceptable_address_codes: Vec<u8>,
    /// Easiest target a block may carry
    #[serde(with = "hex_biguint")]
    pub max_target: BigUint,
    /// Public key paid by the genesis coinbase
    #[serde(with = "hex::serde")]
    pub genesis_pub_key: Vec<u8>,
    /// Genesis block header
    pub genesis: GenesisHeader,
    /// Default P2P port
    pub port: u16,
    /// Blocks between difficulty retargets
    pub interval: u32,
    /// Version byte of dumped private keys
    pub dumped_private_key_header: u8,
    /// Expected duration of one retarget interval, in seconds
    pub target_timespan: u64,
    /// Confirmations before a coinbase can be spent
    pub spendable_coinbase_depth: u32,
    /// Blocks between subsidy halvings
    pub subsidy_decrease_block_count: u32,
    /// DNS seeds for peer discovery
    #[serde(default)]
    pub dns_seeds: Vec<String>,
    /// BIP32 extended public key header
    pub bip32_header_pub: u32,
    /// BIP32 extended private key header
    pub bip32_header_priv: u32,
    /// Payment protocol network name
    pub payment_protocol_id: String,
}

impl ChainParams {
    /// Parameters of the unit-test network.
    ///
    /// The genesis block carries the easiest possible difficulty and is
    /// timestamped at construction.
    pub fn unit_test() -> Self {
        Self::unit_test_at(Utc::now())
    }

    /// Unit-test parameters with a fixed genesis time
    pub fn unit_test_at(genesis_time: DateTime<Utc>) -> Self {
        let easiest = crate::codec::decode_compact_bits(EASIEST_DIFFICULTY_TARGET);
        let max_target = BigUint::from_bytes_be(&UNITTEST_MAX_TARGET);
        let address_header = 111;
        let p2sh_header = 196;

        Self {
            id: ID_UNITTESTNET.to_string(),
            packet_magic: 0x0b11_0907,
            address_header,
            p2sh_header,
            acceptable_address_codes: vec![address_header, p2sh_header],
            max_target,
            genesis_pub_key: UNITTEST_GENESIS_PUB_KEY.to_vec(),
            genesis: GenesisHeader::new(genesis_time, &easiest),
            port: 18335,
            interval: 10,
            dumped_private_key_header: 239,
            target_timespan: 200_000_000,
            spendable_coinbase_depth: 5,
            subsidy_decrease_block_count: 100,
            dns_seeds: Vec::new(),
            bip32_header_pub: 0x0435_87CF,
            bip32_header_priv: 0x0435_8394,
            payment_protocol_id: "unittest".to_string(),
        }
    }

    /// Parse parameters from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(json)?;
        params.check()?;
        Ok(params)
    }

    /// Load parameters from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let params = Self::from_json_str(&json)?;
        log::info!("Loaded chain parameters '{}' from {:?}", params.id, path);
        Ok(params)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write parameters to a JSON file
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Whether `target` is easier than this network allows.
    ///
    /// Negative targets never exceed the bound; rejecting them is left to
    /// consensus validation.
    pub fn exceeds_max_target(&self, target: &BigInt) -> bool {
        *target > BigInt::from_biguint(Sign::Plus, self.max_target.clone())
    }

    /// Whether `addr_version` is an accepted address version byte
    pub fn accepts_address_code(&self, addr_version: u8) -> bool {
        self.acceptable_address_codes.contains(&addr_version)
    }

    fn check(&self) -> Result<(), ParamsError> {
        if self.id.is_empty() {
            return Err(ParamsError::InvalidParams("empty network id".to_string()));
        }
        if self.interval == 0 {
            return Err(ParamsError::InvalidParams(
                "retarget interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// `BigUint` as a bare hex string
mod hex_biguint {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(16))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        let digits = s.strip_prefix("0x").unwrap_or(&s);
        BigUint::parse_bytes(digits.as_bytes(), 16)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex integer: {}", s)))
    }
}
