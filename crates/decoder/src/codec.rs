// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Strict SCALE decoding entry points.
//!
//! The concrete wire shapes live in [`crate::xcm`] as derived
//! `Encode`/`Decode` types; this module owns the contract every decode in
//! the pipeline goes through: a value is either produced from well-formed
//! bytes together with the exact number of bytes consumed, or the whole
//! operation fails with a [`DecodeError`]. No partial or zero-filled values.

use parity_scale_codec::{Compact, Decode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// Bytes were exhausted, a discriminant fell outside the declared
    /// variant set (including unrepresented XCM versions), or a length
    /// prefix overran the buffer.
    #[error("malformed SCALE bytes: {0}")]
    Malformed(#[from] parity_scale_codec::Error),

    /// A value decoded cleanly but left unconsumed input behind.
    #[error("{trailing} trailing bytes after {consumed} consumed")]
    TrailingBytes { consumed: usize, trailing: usize },
}

/// Decode one `T` off the front of `bytes`, returning the value and the
/// number of bytes consumed.
pub fn decode_prefix<T: Decode>(bytes: &[u8]) -> Result<(T, usize), DecodeError> {
    let mut input = bytes;
    let value = T::decode(&mut input).map_err(|e| {
        tracing::trace!(len = bytes.len(), error = %e, "SCALE decode failed");
        DecodeError::Malformed(e)
    })?;
    Ok((value, bytes.len() - input.len()))
}

/// Decode one `T` that must account for the entire buffer.
pub fn decode_exact<T: Decode>(bytes: &[u8]) -> Result<T, DecodeError> {
    let (value, consumed) = decode_prefix(bytes)?;
    if consumed != bytes.len() {
        tracing::trace!(consumed, total = bytes.len(), "trailing bytes after decode");
        return Err(DecodeError::TrailingBytes {
            consumed,
            trailing: bytes.len() - consumed,
        });
    }
    Ok(value)
}

/// Decode a fixed-width little-endian `u128` balance argument.
pub fn decode_u128(bytes: &[u8]) -> Result<u128, DecodeError> {
    decode_exact::<u128>(bytes)
}

/// Decode a compact-encoded `u128` balance argument.
pub fn decode_compact_u128(bytes: &[u8]) -> Result<u128, DecodeError> {
    decode_exact::<Compact<u128>>(bytes).map(|c| c.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_scale_codec::Encode;

    #[test]
    fn test_decode_prefix_reports_consumed() {
        // u32 1000 = 0xe8 0x03 0x00 0x00, plus two bytes of unrelated tail
        let bytes = [0xe8, 0x03, 0x00, 0x00, 0xaa, 0xbb];
        let (value, consumed) = decode_prefix::<u32>(&bytes).unwrap();
        assert_eq!(value, 1000);
        assert_eq!(consumed, 4);
    }

    #[test]
    fn test_decode_exact_rejects_trailing_bytes() {
        let bytes = [0x01, 0x00, 0x00, 0x00, 0xff];
        let result = decode_exact::<u32>(&bytes);
        assert!(matches!(
            result,
            Err(DecodeError::TrailingBytes { consumed: 4, trailing: 1 })
        ));
    }

    #[test]
    fn test_short_buffer_fails_not_zero_fills() {
        // Three bytes cannot hold a u32; must error, never yield 0
        let result = decode_exact::<u32>(&[0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_u128_fixed_width() {
        let encoded = 1_000_000u128.encode();
        assert_eq!(encoded.len(), 16);
        assert_eq!(decode_u128(&encoded).unwrap(), 1_000_000);
    }

    #[test]
    fn test_decode_compact_u128() {
        // compact(1000000) = (1000000 << 2) | 0b10 = 0x003d0902 LE
        let bytes = [0x02, 0x09, 0x3d, 0x00];
        assert_eq!(decode_compact_u128(&bytes).unwrap(), 1_000_000);
    }

    #[test]
    fn test_compact_roundtrip() {
        for value in [0u128, 63, 64, 16383, 16384, 1_000_000, u64::MAX as u128] {
            let encoded = Compact(value).encode();
            assert_eq!(decode_compact_u128(&encoded).unwrap(), value);
        }
    }
}
