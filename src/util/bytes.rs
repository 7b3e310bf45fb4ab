//! Endianness helpers for hash digests and multi-word header fields

use crate::codec::CodecError;

/// Reverse the byte order of a buffer
pub fn reverse_bytes(buf: &[u8]) -> Vec<u8> {
    buf.iter().rev().copied().collect()
}

/// Flip the byte order inside each 4-byte word, keeping word order.
///
/// `trim_to` limits the output to that many bytes; `None` keeps everything,
/// and a trim longer than the buffer is a no-op. An empty buffer always
/// yields an empty result. Otherwise the buffer length must be a multiple of 4.
pub fn reverse_dword_bytes(buf: &[u8], trim_to: Option<usize>) -> Result<Vec<u8>, CodecError> {
    if buf.is_empty() {
        return Ok(Vec::new());
    }
    if buf.len() % 4 != 0 {
        return Err(CodecError::Misaligned { len: buf.len() });
    }

    let mut out: Vec<u8> = buf
        .chunks_exact(4)
        .flat_map(|word| word.iter().rev().copied())
        .collect();
    if let Some(trim) = trim_to {
        out.truncate(trim);
    }
    Ok(out)
}

/// Hex in display order (reversed), as hashes are conventionally shown
pub fn to_display_hex(buf: &[u8]) -> String {
    hex::encode(reverse_bytes(buf))
}

/// Parse display-order hex back into internal byte order
pub fn from_display_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s.trim()).map(|bytes| reverse_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_bytes() {
        assert_eq!(reverse_bytes(&[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
        assert!(reverse_bytes(&[]).is_empty());

        let data = [0xde, 0xad, 0xbe, 0xef, 0x01];
        assert_eq!(reverse_bytes(&reverse_bytes(&data)), data);
    }

    #[test]
    fn test_reverse_dword_bytes() {
        let data = [4, 3, 2, 1, 8, 7, 6, 5];
        assert_eq!(
            reverse_dword_bytes(&data, None).unwrap(),
            vec![1, 2, 3, 4, 5, 6, 7, 8]
        );
        assert_eq!(reverse_dword_bytes(&data, Some(4)).unwrap(), vec![1, 2, 3, 4]);
        assert!(reverse_dword_bytes(&data, Some(0)).unwrap().is_empty());
        assert_eq!(reverse_dword_bytes(&data, Some(16)).unwrap().len(), 8);
        // Trims need not fall on a word boundary
        assert_eq!(reverse_dword_bytes(&data, Some(6)).unwrap(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(reverse_dword_bytes(&data, Some(1)).unwrap(), vec![1]);
    }

    #[test]
    fn test_reverse_dword_bytes_empty() {
        assert!(reverse_dword_bytes(&[], Some(0)).unwrap().is_empty());
        assert!(reverse_dword_bytes(&[], None).unwrap().is_empty());
        assert!(reverse_dword_bytes(&[], Some(8)).unwrap().is_empty());
        assert!(reverse_dword_bytes(&[], Some(1)).unwrap().is_empty());
        assert!(reverse_dword_bytes(&[], Some(2)).unwrap().is_empty());
    }

    #[test]
    fn test_reverse_dword_bytes_misaligned() {
        assert_eq!(
            reverse_dword_bytes(&[1, 2, 3, 4, 5], None),
            Err(CodecError::Misaligned { len: 5 })
        );
        assert_eq!(
            reverse_dword_bytes(&[1, 2, 3, 4, 5], Some(4)),
            Err(CodecError::Misaligned { len: 5 })
        );
    }

    #[test]
    fn test_display_hex() {
        let hash = [0x01, 0x02, 0x03, 0xff];
        assert_eq!(to_display_hex(&hash), "ff030201");
        assert_eq!(from_display_hex("ff030201").unwrap(), hash);
        assert!(from_display_hex("zz").is_err());
    }
}
