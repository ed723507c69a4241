// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution of a decoded (versioned) MultiLocation into a concrete
//! destination chain and, where the interior carries one, an account.
//!
//! The algorithm is deliberately narrow: `Here`, a lone `Parachain`, a lone
//! account junction, or an `X2` pair combining the two. Everything else is
//! well-formed XCM that this subsystem refuses to interpret: the caller
//! falls back to a generic display instead of rendering a guess.

use crate::utils::format::{hex_with_prefix, ss58_with_prefix};
use crate::xcm::{VersionedMultiLocation, v2, v3};
use thiserror::Error;
use xcm_transfer_decoder_registry::{ChainInfo, ChainRegistry};

#[derive(Debug, Error)]
pub enum UnsupportedLocationError {
    #[error("cannot resolve a location {parents} parents up")]
    TooManyParents { parents: u8 },

    #[error("chain '{chain}' has no relay chain to step up to")]
    NoRelayChain { chain: String },

    #[error("no chain registered with para id {para_id} under relay '{relay}'")]
    UnknownParachain { relay: String, para_id: u32 },

    #[error("junction pair is missing a {missing} contribution")]
    IncompletePair { missing: &'static str },

    #[error("unsupported interior shape: {0}")]
    UnsupportedInterior(&'static str),
}

/// An embedded beneficiary account, before re-encoding for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRef {
    Id32([u8; 32]),
    Key20([u8; 20]),
}

impl AccountRef {
    /// Human-readable form of the account in `chain`'s native format:
    /// SS58 with the chain's prefix for 32-byte ids, 0x-hex for 20-byte keys.
    pub fn to_address_on(&self, chain: &ChainInfo) -> String {
        match self {
            AccountRef::Id32(id) => ss58_with_prefix(id, chain.ss58_prefix),
            AccountRef::Key20(key) => hex_with_prefix(key),
        }
    }
}

/// Fully resolved destination. `account` is present only when the interior
/// itself carried an account junction.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub chain: ChainInfo,
    pub account: Option<AccountRef>,
}

/// Version-agnostic view of one interior step, confined to this module.
/// Only the junction kinds the resolution algorithm can act on are
/// distinguished; the rest keep their name for the error message.
enum Hop {
    Parachain(u32),
    Account(AccountRef),
    Other(&'static str),
}

fn hop_v2(junction: &v2::Junction) -> Hop {
    match junction {
        v2::Junction::Parachain(id) => Hop::Parachain(*id),
        v2::Junction::AccountId32 { id, .. } => Hop::Account(AccountRef::Id32(*id)),
        v2::Junction::AccountKey20 { key, .. } => Hop::Account(AccountRef::Key20(*key)),
        v2::Junction::AccountIndex64 { .. } => Hop::Other("AccountIndex64"),
        v2::Junction::PalletInstance(_) => Hop::Other("PalletInstance"),
        v2::Junction::GeneralIndex(_) => Hop::Other("GeneralIndex"),
        v2::Junction::GeneralKey(_) => Hop::Other("GeneralKey"),
        v2::Junction::OnlyChild => Hop::Other("OnlyChild"),
        v2::Junction::Plurality { .. } => Hop::Other("Plurality"),
    }
}

fn hop_v3(junction: &v3::Junction) -> Hop {
    match junction {
        v3::Junction::Parachain(id) => Hop::Parachain(*id),
        v3::Junction::AccountId32 { id, .. } => Hop::Account(AccountRef::Id32(*id)),
        v3::Junction::AccountKey20 { key, .. } => Hop::Account(AccountRef::Key20(*key)),
        v3::Junction::AccountIndex64 { .. } => Hop::Other("AccountIndex64"),
        v3::Junction::PalletInstance(_) => Hop::Other("PalletInstance"),
        v3::Junction::GeneralIndex(_) => Hop::Other("GeneralIndex"),
        v3::Junction::GeneralKey { .. } => Hop::Other("GeneralKey"),
        v3::Junction::OnlyChild => Hop::Other("OnlyChild"),
        v3::Junction::Plurality { .. } => Hop::Other("Plurality"),
        v3::Junction::GlobalConsensus(_) => Hop::Other("GlobalConsensus"),
    }
}

fn hops(location: &VersionedMultiLocation) -> (u8, Vec<Hop>) {
    match location {
        VersionedMultiLocation::V2(loc) => (
            loc.parents,
            loc.interior.as_slice().iter().map(hop_v2).collect(),
        ),
        VersionedMultiLocation::V3(loc) => (
            loc.parents,
            loc.interior.as_slice().iter().map(hop_v3).collect(),
        ),
    }
}

/// The chain `parents` hops up from `origin`: the origin itself, or its
/// relay chain.
fn chain_at_parents<'a>(
    parents: u8,
    origin: &'a ChainInfo,
    chains: &'a ChainRegistry,
) -> Result<&'a ChainInfo, UnsupportedLocationError> {
    match parents {
        0 => Ok(origin),
        1 => chains
            .relay_of(origin)
            .ok_or_else(|| UnsupportedLocationError::NoRelayChain {
                chain: origin.id.clone(),
            }),
        _ => Err(UnsupportedLocationError::TooManyParents { parents }),
    }
}

/// The sibling/child parachain with the given id, scoped to the origin's
/// relay (or the origin itself when it is a relay).
fn parachain<'a>(
    para_id: u32,
    origin: &ChainInfo,
    chains: &'a ChainRegistry,
) -> Result<&'a ChainInfo, UnsupportedLocationError> {
    let relay = origin.relay_scope();
    chains.parachain(relay, para_id).ok_or_else(|| {
        tracing::debug!(relay, para_id, "parachain not in registry");
        UnsupportedLocationError::UnknownParachain {
            relay: relay.to_string(),
            para_id,
        }
    })
}

/// Resolve a decoded location issued by `origin` against the chain registry.
///
/// Never returns a partial result: either both the chain and whatever the
/// interior promised are resolved, or the location is rejected.
pub fn resolve_location(
    location: &VersionedMultiLocation,
    origin: &ChainInfo,
    chains: &ChainRegistry,
) -> Result<ResolvedLocation, UnsupportedLocationError> {
    let (parents, hops) = hops(location);
    if parents > 1 {
        return Err(UnsupportedLocationError::TooManyParents { parents });
    }

    match hops.as_slice() {
        // `Here`: the issuing chain itself, or its relay one hop up
        [] => {
            let chain = chain_at_parents(parents, origin, chains)?;
            Ok(ResolvedLocation {
                chain: chain.clone(),
                account: None,
            })
        }

        [Hop::Parachain(para_id)] => {
            let chain = parachain(*para_id, origin, chains)?;
            Ok(ResolvedLocation {
                chain: chain.clone(),
                account: None,
            })
        }

        [Hop::Account(account)] => {
            let chain = chain_at_parents(parents, origin, chains)?;
            Ok(ResolvedLocation {
                chain: chain.clone(),
                account: Some(*account),
            })
        }

        [a, b] => {
            let mut chain = None;
            let mut account = None;
            for hop in [a, b] {
                match hop {
                    Hop::Parachain(para_id) => {
                        chain = Some(parachain(*para_id, origin, chains)?);
                    }
                    Hop::Account(acc) => account = Some(*acc),
                    Hop::Other(name) => {
                        return Err(UnsupportedLocationError::UnsupportedInterior(*name));
                    }
                }
            }
            let chain = chain.ok_or(UnsupportedLocationError::IncompletePair { missing: "chain" })?;
            let account =
                account.ok_or(UnsupportedLocationError::IncompletePair { missing: "account" })?;
            Ok(ResolvedLocation {
                chain: chain.clone(),
                account: Some(account),
            })
        }

        [Hop::Other(name)] => Err(UnsupportedLocationError::UnsupportedInterior(*name)),

        _ => {
            tracing::debug!(junctions = hops.len(), "interior arity not supported");
            Err(UnsupportedLocationError::UnsupportedInterior("X3..X8"))
        }
    }
}
