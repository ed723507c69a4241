// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! XCM V2 wire shapes.
//!
//! Kept fully independent from [`crate::xcm::v3`]: the two generations
//! genuinely diverge (mandatory vs. optional network ids on account
//! junctions, variable vs. fixed-length `GeneralKey`, the V3-only
//! `GlobalConsensus`), so sharing types between them would paper over
//! real wire differences. Every discriminant is spelled out with
//! `#[codec(index = ..)]`; a discriminant outside the declared set fails
//! to decode.

use parity_scale_codec::{Decode, Encode};

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum NetworkId {
    #[codec(index = 0)]
    Any,
    #[codec(index = 1)]
    Named(Vec<u8>),
    #[codec(index = 2)]
    Polkadot,
    #[codec(index = 3)]
    Kusama,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum BodyId {
    #[codec(index = 0)]
    Unit,
    #[codec(index = 1)]
    Named(Vec<u8>),
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

/// One step of a location path. V2 account junctions always carry a
/// network id and `GeneralKey` is a variable-length vector.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum Junction {
    #[codec(index = 0)]
    Parachain(#[codec(compact)] u32),
    #[codec(index = 1)]
    AccountId32 { network: NetworkId, id: [u8; 32] },
    #[codec(index = 2)]
    AccountIndex64 {
        network: NetworkId,
        #[codec(compact)]
        index: u64,
    },
    #[codec(index = 3)]
    AccountKey20 { network: NetworkId, key: [u8; 20] },
    #[codec(index = 4)]
    PalletInstance(u8),
    #[codec(index = 5)]
    GeneralIndex(#[codec(compact)] u128),
    #[codec(index = 6)]
    GeneralKey(Vec<u8>),
    #[codec(index = 7)]
    OnlyChild,
    #[codec(index = 8)]
    Plurality { id: BodyId, part: BodyPart },
}

/// Interior junctions. Arity is part of the wire tag: `X2` is a distinct
/// variant holding exactly two junctions, not a resizable list.
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
    Abstract(Vec<u8>),
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
    #[codec(index = 6)]
    Blob(Vec<u8>),
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

/// Ordered list of assets, length-prefixed on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MultiAssets(pub Vec<MultiAsset>);
