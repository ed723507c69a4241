// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! XCM V3 wire shapes.
//!
//! Differences from V2 that matter on the wire: account junctions carry an
//! *optional* network id, `GeneralKey` is a fixed 32-byte array with an
//! explicit length field, `GlobalConsensus` exists, the network id set
//! gained genesis/fork/Ethereum/Bitcoin kinds and lost `Any`/`Named`, and
//! abstract asset ids are fixed 32-byte arrays.

use parity_scale_codec::{Decode, Encode};

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum NetworkId {
    #[codec(index = 0)]
    ByGenesis([u8; 32]),
    #[codec(index = 1)]
    ByFork { block_number: u64, block_hash: [u8; 32] },
    #[codec(index = 2)]
    Polkadot,
    #[codec(index = 3)]
    Kusama,
    #[codec(index = 4)]
    Westend,
    #[codec(index = 5)]
    Rococo,
    #[codec(index = 6)]
    Wococo,
    #[codec(index = 7)]
    Ethereum {
        #[codec(compact)]
        chain_id: u64,
    },
    #[codec(index = 8)]
    BitcoinCore,
    #[codec(index = 9)]
    BitcoinCash,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum BodyId {
    #[codec(index = 0)]
    Unit,
    #[codec(index = 1)]
    Moniker([u8; 4]),
    #[codec(index = 2)]
    Index(#[codec(compact)] u32),
    #[codec(index = 3)]
    Executive,
    #[codec(index = 4)]
    Technical,
    #[codec(index = 5)]
    Legislative,
    #[codec(index = 6)]
    Judicial,
    #[codec(index = 7)]
    Defense,
    #[codec(index = 8)]
    Administration,
    #[codec(index = 9)]
    Treasury,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum BodyPart {
    #[codec(index = 0)]
    Voice,
    #[codec(index = 1)]
    Members {
        #[codec(compact)]
        count: u32,
    },
    #[codec(index = 2)]
    Fraction {
        #[codec(compact)]
        nom: u32,
        #[codec(compact)]
        denom: u32,
    },
    #[codec(index = 3)]
    AtLeastProportion {
        #[codec(compact)]
        nom: u32,
        #[codec(compact)]
        denom: u32,
    },
    #[codec(index = 4)]
    MoreThanProportion {
        #[codec(compact)]
        nom: u32,
        #[codec(compact)]
        denom: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum Junction {
    #[codec(index = 0)]
    Parachain(#[codec(compact)] u32),
    #[codec(index = 1)]
    AccountId32 {
        network: Option<NetworkId>,
        id: [u8; 32],
    },
    #[codec(index = 2)]
    AccountIndex64 {
        network: Option<NetworkId>,
        #[codec(compact)]
        index: u64,
    },
    #[codec(index = 3)]
    AccountKey20 {
        network: Option<NetworkId>,
        key: [u8; 20],
    },
    #[codec(index = 4)]
    PalletInstance(u8),
    #[codec(index = 5)]
    GeneralIndex(#[codec(compact)] u128),
    /// Fixed-size key; `length` says how many of the 32 data bytes are
    /// meaningful. Replaces V2's variable-length vector form.
    #[codec(index = 6)]
    GeneralKey { length: u8, data: [u8; 32] },
    #[codec(index = 7)]
    OnlyChild,
    #[codec(index = 8)]
    Plurality { id: BodyId, part: BodyPart },
    #[codec(index = 9)]
    GlobalConsensus(NetworkId),
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum Junctions {
    #[codec(index = 0)]
    Here,
    #[codec(index = 1)]
    X1(Junction),
    #[codec(index = 2)]
    X2([Junction; 2]),
    #[codec(index = 3)]
    X3([Junction; 3]),
    #[codec(index = 4)]
    X4([Junction; 4]),
    #[codec(index = 5)]
    X5([Junction; 5]),
    #[codec(index = 6)]
    X6([Junction; 6]),
    #[codec(index = 7)]
    X7([Junction; 7]),
    #[codec(index = 8)]
    X8([Junction; 8]),
}

impl Junctions {
    pub fn as_slice(&self) -> &[Junction] {
        match self {
            Junctions::Here => &[],
            Junctions::X1(j) => core::slice::from_ref(j),
            Junctions::X2(j) => j,
            Junctions::X3(j) => j,
            Junctions::X4(j) => j,
            Junctions::X5(j) => j,
            Junctions::X6(j) => j,
            Junctions::X7(j) => j,
            Junctions::X8(j) => j,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MultiLocation {
    pub parents: u8,
    pub interior: Junctions,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum AssetId {
    #[codec(index = 0)]
    Concrete(MultiLocation),
    #[codec(index = 1)]
    Abstract([u8; 32]),
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum AssetInstance {
    #[codec(index = 0)]
    Undefined,
    #[codec(index = 1)]
    Index(#[codec(compact)] u128),
    #[codec(index = 2)]
    Array4([u8; 4]),
    #[codec(index = 3)]
    Array8([u8; 8]),
    #[codec(index = 4)]
    Array16([u8; 16]),
    #[codec(index = 5)]
    Array32([u8; 32]),
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum Fungibility {
    #[codec(index = 0)]
    Fungible(#[codec(compact)] u128),
    #[codec(index = 1)]
    NonFungible(AssetInstance),
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MultiAsset {
    pub id: AssetId,
    pub fun: Fungibility,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MultiAssets(pub Vec<MultiAsset>);
