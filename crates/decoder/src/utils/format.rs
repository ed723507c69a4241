//! Formatting utilities for hex encoding and address conversion.

use sp_core::crypto::{AccountId32, Ss58Codec};

/// Format bytes as hex string with "0x" prefix
pub fn hex_with_prefix(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Encode a 32-byte account id as SS58 with the given address format prefix.
pub fn ss58_with_prefix(id: &[u8; 32], ss58_prefix: u16) -> String {
    AccountId32::from(*id).to_ss58check_with_version(ss58_prefix.into())
}
