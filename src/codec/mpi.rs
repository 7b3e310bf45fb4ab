//! MPI integer encoding
//!
//! Sign-and-magnitude big-endian buffers: the top bit of the first payload byte
//! is the sign flag, and a zero byte is prepended when the magnitude would
//! otherwise claim that bit. Zero is an empty payload. The length-prefixed
//! variant adds a 4-byte big-endian payload length in front.

use super::CodecError;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};

/// Size of the optional big-endian length prefix
pub const MPI_LENGTH_PREFIX_SIZE: usize = 4;

/// Encode a signed integer as an MPI buffer
pub fn encode_mpi(value: &BigInt, include_length: bool) -> Vec<u8> {
    let mut payload = if value.is_zero() {
        Vec::new()
    } else {
        value.magnitude().to_bytes_be()
    };

    if payload.first().is_some_and(|b| b & 0x80 != 0) {
        payload.insert(0, 0);
    }
    if value.is_negative() {
        payload[0] |= 0x80;
    }

    if !include_length {
        return payload;
    }

    let mut out = Vec::with_capacity(MPI_LENGTH_PREFIX_SIZE + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(&payload);
    out
}

/// Decode an MPI buffer.
///
/// With `has_length`, the declared payload must be fully present; a short
/// buffer is rejected rather than read as a different number. Trailing bytes
/// after the declared payload are ignored.
pub fn decode_mpi(buf: &[u8], has_length: bool) -> Result<BigInt, CodecError> {
    let payload = if has_length {
        let (prefix, rest) = buf
            .split_first_chunk::<MPI_LENGTH_PREFIX_SIZE>()
            .ok_or(CodecError::MissingLengthPrefix { len: buf.len() })?;
        let declared = u32::from_be_bytes(*prefix) as usize;
        if declared > rest.len() {
            return Err(CodecError::Truncated {
                declared,
                available: rest.len(),
            });
        }
        &rest[..declared]
    } else {
        buf
    };

    let Some((&first, tail)) = payload.split_first() else {
        return Ok(BigInt::zero());
    };

    let mut magnitude = Vec::with_capacity(payload.len());
    magnitude.push(first & 0x7f);
    magnitude.extend_from_slice(tail);

    let sign = if first & 0x80 != 0 {
        Sign::Minus
    } else {
        Sign::Plus
    };
    Ok(BigInt::from_biguint(sign, BigUint::from_bytes_be(&magnitude)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_prefixed_vector_round_trip() {
        let mut mpi = vec![0, 0, 0, 29, 0xff, 0xff, 0xff];
        mpi.extend(std::iter::repeat(0u8).take(26));
        assert_eq!(mpi.len(), 33);

        let value = decode_mpi(&mpi, true).unwrap();
        assert!(value.is_negative());
        assert_eq!(encode_mpi(&value, true), mpi);
    }

    #[test]
    fn test_negative_values() {
        for v in [-1i64, -128, -255, -32768] {
            let value = BigInt::from(v);
            for with_len in [true, false] {
                let buf = encode_mpi(&value, with_len);
                assert_eq!(decode_mpi(&buf, with_len).unwrap(), value);
            }
        }
        assert_eq!(encode_mpi(&BigInt::from(-1), false), vec![0x81]);
        assert_eq!(encode_mpi(&BigInt::from(-128), true), vec![0, 0, 0, 2, 0x80, 0x80]);
    }

    #[test]
    fn test_high_bit_padding() {
        assert_eq!(encode_mpi(&BigInt::from(0x80), false), vec![0x00, 0x80]);
        assert_eq!(encode_mpi(&BigInt::from(0x7f), false), vec![0x7f]);
        assert_eq!(encode_mpi(&BigInt::from(0xff00), false), vec![0x00, 0xff, 0x00]);
        assert_eq!(
            decode_mpi(&[0x00, 0xff, 0x00], false).unwrap(),
            BigInt::from(0xff00)
        );
    }

    #[test]
    fn test_zero() {
        assert!(encode_mpi(&BigInt::zero(), false).is_empty());
        assert_eq!(encode_mpi(&BigInt::zero(), true), vec![0, 0, 0, 0]);
        assert!(decode_mpi(&[], false).unwrap().is_zero());
        assert!(decode_mpi(&[0, 0, 0, 0], true).unwrap().is_zero());
        // Negative zero collapses to zero
        assert!(decode_mpi(&[0x80], false).unwrap().is_zero());
    }

    #[test]
    fn test_truncated_payload_rejected() {
        let err = decode_mpi(&[0, 0, 0, 3, 0x01, 0x02], true).unwrap_err();
        assert_eq!(
            err,
            CodecError::Truncated {
                declared: 3,
                available: 2
            }
        );
        assert_eq!(
            decode_mpi(&[0, 0], true).unwrap_err(),
            CodecError::MissingLengthPrefix { len: 2 }
        );
    }

    #[test]
    fn test_round_trip_generated_values() {
        for len in 1..=40usize {
            for lead in [0x01u8, 0x7f, 0x80, 0xff] {
                let mut bytes: Vec<u8> = (0..len).map(|i| (i * 37 + len * 11) as u8).collect();
                bytes[0] = lead;
                let magnitude = BigInt::from_bytes_be(Sign::Plus, &bytes);

                for value in [magnitude.clone(), -magnitude] {
                    for with_len in [true, false] {
                        let buf = encode_mpi(&value, with_len);
                        assert_eq!(decode_mpi(&buf, with_len).unwrap(), value);
                    }
                }
            }
        }
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let value = decode_mpi(&[0, 0, 0, 1, 0x05, 0xaa, 0xbb], true).unwrap();
        assert_eq!(value, BigInt::from(5));
    }
}
