//! Compact target encoding
//!
//! Block headers carry the proof-of-work target as a 32-bit "bits" field laid out as
//! `[exponent:8][sign:1][mantissa:23]`. The exponent counts the bytes of the magnitude,
//! and the mantissa holds its top three bytes.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Constants
// =============================================================================

/// Sign flag inside the compact representation
pub const COMPACT_SIGN_BIT: u32 = 0x0080_0000;

/// Mantissa bits (sign flag excluded)
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Easiest target a block can carry; used by test networks for their genesis block
pub const EASIEST_DIFFICULTY_TARGET: u32 = 0x207f_ffff;

// =============================================================================
// Codec
// =============================================================================

/// Expand compact bits into the full target value.
///
/// Total over every 32-bit input. Exponents up to 255 are honoured with
/// unbounded precision, and a set sign flag yields a negative result.
pub fn decode_compact_bits(bits: u32) -> BigInt {
    let exponent = bits >> 24;
    let mantissa = bits & MANTISSA_MASK;
    let negative = bits & COMPACT_SIGN_BIT != 0;

    let magnitude = if exponent <= 3 {
        BigUint::from(mantissa >> (8 * (3 - exponent)))
    } else {
        BigUint::from(mantissa) << (8 * (exponent - 3) as usize)
    };

    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, magnitude)
}

/// Pack a target value into compact bits.
///
/// The magnitude gains a notional leading zero byte when its top bit is set, so
/// the mantissa never collides with the sign flag. Only the top three bytes
/// survive; lower bytes are dropped.
pub fn encode_compact_bits(value: &BigInt) -> u32 {
    let mut bytes = if value.is_zero() {
        Vec::new()
    } else {
        value.magnitude().to_bytes_be()
    };
    if bytes.first().is_some_and(|b| b & 0x80 != 0) {
        bytes.insert(0, 0);
    }

    let size = bytes.len();
    if size > 0xff {
        log::warn!(
            "Target of {} bytes exceeds compact exponent range, exponent truncated",
            size
        );
    }

    let mantissa = bytes
        .iter()
        .chain(std::iter::repeat(&0u8))
        .take(3)
        .fold(0u32, |acc, b| (acc << 8) | u32::from(*b));

    let mut bits = (((size as u32) & 0xff) << 24) | mantissa;
    if value.is_negative() {
        bits |= COMPACT_SIGN_BIT;
    }
    bits
}

// =============================================================================
// CompactBits
// =============================================================================

/// The "difficulty bits" field of a block header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompactBits(pub u32);

impl CompactBits {
    /// Pack a target
    pub fn from_target(target: &BigInt) -> Self {
        Self(encode_compact_bits(target))
    }

    /// Expand to the full target
    pub fn to_target(self) -> BigInt {
        decode_compact_bits(self.0)
    }

    /// Byte length of the encoded magnitude
    pub fn exponent(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Mantissa without the sign flag
    pub fn mantissa(self) -> u32 {
        self.0 & MANTISSA_MASK
    }

    /// Whether the sign flag is set. Never true for a real proof-of-work target.
    pub fn is_negative(self) -> bool {
        self.0 & COMPACT_SIGN_BIT != 0
    }
}

impl From<u32> for CompactBits {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<CompactBits> for u32 {
    fn from(bits: CompactBits) -> Self {
        bits.0
    }
}

impl fmt::Display for CompactBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl FromStr for CompactBits {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        u32::from_str_radix(digits, 16).map(Self)
    }
}

impl Serialize for CompactBits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CompactBits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
