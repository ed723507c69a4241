//! Registry snapshots and encoding helpers shared by the integration tests.
//!
//! The registries model a small slice of a real deployment: one relay
//! (polkadot) with an asset hub and an orml-style parachain, plus a kusama
//! relay so cross-relay isolation can be exercised.

use parity_scale_codec::Encode;
use xcm_transfer_decoder::xcm::{VersionedMultiLocation, v3};
use xcm_transfer_decoder_registry::{ChainRegistry, TokenRegistry};

/// sr25519 dev account `Alice`.
pub const ALICE: [u8; 32] = [
    0xd4, 0x35, 0x93, 0xc7, 0x15, 0xfd, 0xd3, 0x1c, 0x61, 0x14, 0x1a, 0xbd, 0x04, 0xa9, 0x9f,
    0xd6, 0x82, 0x2c, 0x85, 0x58, 0x85, 0x4c, 0xcd, 0xe3, 0x9a, 0x56, 0x84, 0xe7, 0xa5, 0x6d,
    0xa2, 0x7d,
];

pub const BOB: [u8; 32] = [0x22; 32];

pub const CHAINS_JSON: &str = r#"[
    {"id": "polkadot", "ss58Prefix": 0, "nativeTokenId": "polkadot-native-dot"},
    {"id": "kusama", "ss58Prefix": 2, "nativeTokenId": "kusama-native-ksm"},
    {"id": "statemint", "relayChain": "polkadot", "paraId": 1000, "ss58Prefix": 0,
     "nativeTokenId": "statemint-native-dot"},
    {"id": "acala", "relayChain": "polkadot", "paraId": 2000, "ss58Prefix": 10,
     "nativeTokenId": "acala-native-aca"},
    {"id": "bifrost_kusama", "relayChain": "kusama", "paraId": 2001, "ss58Prefix": 6,
     "nativeTokenId": "bifrost_kusama-native-bnc"}
]"#;

pub const TOKENS_JSON: &str = r#"[
    {"id": "polkadot-native-dot", "type": "native", "symbol": "DOT", "decimals": 10,
     "logo": "dot.svg", "chain": "polkadot"},
    {"id": "kusama-native-ksm", "type": "native", "symbol": "KSM", "decimals": 12,
     "chain": "kusama"},
    {"id": "statemint-native-dot", "type": "native", "symbol": "DOT", "decimals": 10,
     "chain": "statemint"},
    {"id": "statemint-substrate-assets-1984-usdt", "type": "substrate-assets",
     "onChainId": 1984, "symbol": "USDt", "decimals": 6, "logo": "usdt.svg",
     "chain": "statemint"},
    {"id": "acala-native-aca", "type": "native", "onChainId": {"Token": "ACA"},
     "symbol": "ACA", "decimals": 12, "chain": "acala"},
    {"id": "bifrost_kusama-native-bnc", "type": "native", "onChainId": {"Native": "BNC"},
     "symbol": "BNC", "decimals": 12, "chain": "bifrost_kusama"},
    {"id": "bifrost_kusama-orml-vsksm", "type": "orml", "onChainId": {"VSToken": "KSM"},
     "symbol": "vsKSM", "decimals": 12, "chain": "bifrost_kusama"}
]"#;

pub fn chain_registry() -> ChainRegistry {
    ChainRegistry::from_json_str(CHAINS_JSON).expect("chain fixture parses")
}

pub fn token_registry() -> TokenRegistry {
    TokenRegistry::from_json_str(TOKENS_JSON).expect("token fixture parses")
}

/// SCALE bytes of a V3 `{parents, X1(AccountId32 {network: None, id})}`
/// beneficiary location.
pub fn v3_beneficiary(parents: u8, id: [u8; 32]) -> Vec<u8> {
    VersionedMultiLocation::V3(v3::MultiLocation {
        parents,
        interior: v3::Junctions::X1(v3::Junction::AccountId32 { network: None, id }),
    })
    .encode()
}

/// SCALE bytes of a V3 `{parents: 1, X2(Parachain(para_id), AccountId32)}`
/// combined x-tokens destination.
pub fn v3_combined_dest(para_id: u32, id: [u8; 32]) -> Vec<u8> {
    VersionedMultiLocation::V3(v3::MultiLocation {
        parents: 1,
        interior: v3::Junctions::X2([
            v3::Junction::Parachain(para_id),
            v3::Junction::AccountId32 { network: None, id },
        ]),
    })
    .encode()
}
