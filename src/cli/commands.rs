//! CLI commands for the codec tool
//!
//! Implements all command handlers for the CLI interface.

use crate::codec::{decode_mpi, encode_mpi, CompactBits};
use crate::params::ChainParams;
use crate::util::{date_time_format, max_of_most_freq, reverse_bytes, reverse_dword_bytes};
use num_bigint::BigInt;
use num_traits::{Num, Signed};
use std::path::Path;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Application state
pub struct AppState {
    pub params: ChainParams,
}

impl AppState {
    /// Load chain parameters from `config`, or fall back to the unit-test network
    pub fn new(config: Option<&Path>) -> CliResult<Self> {
        let params = match config {
            Some(path) => ChainParams::from_json_file(path)?,
            None => {
                log::debug!("No chain config given, using unit-test parameters");
                ChainParams::unit_test()
            }
        };
        Ok(Self { params })
    }
}

/// Parse a signed integer written in decimal or `0x`-prefixed hex
pub fn parse_int(s: &str) -> CliResult<BigInt> {
    let s = s.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let magnitude = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex_digits) => BigInt::from_str_radix(hex_digits, 16)?,
        None => BigInt::from_str_radix(body, 10)?,
    };
    Ok(if negative { -magnitude } else { magnitude })
}

fn signed_hex(value: &BigInt) -> String {
    let sign = if value.is_negative() { "-" } else { "" };
    format!("{}0x{}", sign, value.magnitude().to_str_radix(16))
}

fn parse_hex_bytes(s: &str) -> CliResult<Vec<u8>> {
    let s = s.trim();
    Ok(hex::decode(s.strip_prefix("0x").unwrap_or(s))?)
}

/// Expand compact bits into a target
pub fn cmd_bits_decode(bits: &str) -> CliResult<()> {
    let bits: CompactBits = bits.parse()?;
    let target = bits.to_target();

    println!("Compact bits {}", bits);
    println!("   ├─ Exponent: {}", bits.exponent());
    println!("   ├─ Mantissa: 0x{:06x}", bits.mantissa());
    println!("   ├─ Negative: {}", bits.is_negative());
    println!("   └─ Target: {}", signed_hex(&target));

    Ok(())
}

/// Pack a target into compact bits
pub fn cmd_bits_encode(state: &AppState, target: &str) -> CliResult<()> {
    let target = parse_int(target)?;
    let bits = CompactBits::from_target(&target);

    println!("Target {}", signed_hex(&target));
    println!("   ├─ Compact bits: {}", bits);
    println!("   ├─ Round trip: {}", signed_hex(&bits.to_target()));
    println!(
        "   └─ Above {} max target: {}",
        state.params.id,
        state.params.exceeds_max_target(&target)
    );

    Ok(())
}

/// Encode an integer as an MPI buffer
pub fn cmd_mpi_encode(value: &str, with_length: bool) -> CliResult<()> {
    let value = parse_int(value)?;
    println!("{}", hex::encode(encode_mpi(&value, with_length)));
    Ok(())
}

/// Decode an MPI buffer
pub fn cmd_mpi_decode(buf: &str, with_length: bool) -> CliResult<()> {
    let value = decode_mpi(&parse_hex_bytes(buf)?, with_length)?;
    println!("{}", value);
    Ok(())
}

/// Reverse a hex buffer
pub fn cmd_reverse(buf: &str) -> CliResult<()> {
    println!("{}", hex::encode(reverse_bytes(&parse_hex_bytes(buf)?)));
    Ok(())
}

/// Flip byte order inside each 4-byte word of a hex buffer
pub fn cmd_dword(buf: &str, trim: Option<usize>) -> CliResult<()> {
    let out = reverse_dword_bytes(&parse_hex_bytes(buf)?, trim)?;
    println!("{}", hex::encode(out));
    Ok(())
}

/// Most frequent of the given values
pub fn cmd_mode(values: &[i64]) -> CliResult<()> {
    println!("{}", max_of_most_freq(values.iter().copied()));
    Ok(())
}

/// Format a millisecond timestamp
pub fn cmd_time(millis: i64) -> CliResult<()> {
    let formatted = date_time_format(millis)
        .ok_or_else(|| format!("timestamp out of range: {}", millis))?;
    println!("{}", formatted);
    Ok(())
}

/// Show the active chain parameters
pub fn cmd_params(state: &AppState, json: bool) -> CliResult<()> {
    let params = &state.params;
    if json {
        println!("{}", params.to_json()?);
        return Ok(());
    }

    println!("Chain parameters: {}", params.id);
    println!("   ├─ Packet magic: 0x{:08x}", params.packet_magic);
    println!("   ├─ Port: {}", params.port);
    println!("   ├─ Address headers: {:?}", params.acceptable_address_codes);
    println!("   ├─ Max target: 0x{}", params.max_target.to_str_radix(16));
    println!("   ├─ Genesis difficulty: {}", params.genesis.difficulty_target);
    println!("   ├─ Genesis target: {}", signed_hex(&params.genesis.target()));
    println!("   └─ Retarget interval: {} blocks", params.interval);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42").unwrap(), BigInt::from(42));
        assert_eq!(parse_int("-128").unwrap(), BigInt::from(-128));
        assert_eq!(parse_int("0x1234560000").unwrap(), BigInt::from(0x1234560000i64));
        assert_eq!(parse_int("-0xff").unwrap(), BigInt::from(-255));
        assert!(parse_int("0xzz").is_err());
    }

    #[test]
    fn test_signed_hex() {
        assert_eq!(signed_hex(&BigInt::from(-255)), "-0xff");
        assert_eq!(signed_hex(&BigInt::from(0)), "0x0");
    }

    #[test]
    fn test_commands_reject_bad_input() {
        assert!(cmd_mpi_decode("00000003ff", true).is_err());
        assert!(cmd_dword("0102030405", None).is_err());
        assert!(cmd_bits_decode("nothex").is_err());
        assert!(cmd_time(i64::MAX).is_err());
    }

    #[test]
    fn test_commands_accept_valid_input() {
        let state = AppState::new(None).unwrap();
        assert!(cmd_bits_decode("0x1d00ffff").is_ok());
        assert!(cmd_bits_encode(&state, "0x1234560000").is_ok());
        assert!(cmd_mpi_encode("-1", true).is_ok());
        assert!(cmd_mpi_decode("0000000180", true).is_ok());
        assert!(cmd_dword("0403020108070605", Some(4)).is_ok());
        assert!(cmd_mode(&[1, 1, 2, 2]).is_ok());
        assert!(cmd_params(&state, true).is_ok());
    }
}
