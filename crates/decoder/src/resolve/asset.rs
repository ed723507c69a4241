// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution of a decoded asset reference into a registered token and an
//! integer amount.
//!
//! Two input shapes reach this module: a statically-typed
//! `VersionedMultiAssets` from XCM-pallet transfers, and the opaque
//! chain-specific currency argument of x-tokens transfers. The latter has
//! no wire schema of its own, so it is confined here as the narrow
//! [`CurrencyId`] sum type and a set of matching heuristics against the
//! token registry.

use crate::xcm::{VersionedMultiAssets, v2, v3};
use serde_json::Value;
use thiserror::Error;
use xcm_transfer_decoder_registry::{ChainInfo, TokenInfo, TokenRegistry};

/// Pallet index under which pallet-assets tokens are addressed on
/// asset-hub style chains.
const ASSETS_PALLET_INSTANCE: u8 = 50;

#[derive(Debug, Error)]
pub enum TokenNotFoundError {
    #[error("expected exactly one asset, got {count}")]
    MultipleAssets { count: usize },

    #[error("non-fungible assets are not supported")]
    NotFungible,

    #[error("abstract asset ids are not supported")]
    AbstractAsset,

    #[error("unsupported asset location shape: {0}")]
    UnsupportedAssetLocation(&'static str),

    #[error("native token '{token_id}' of chain '{chain}' is not registered")]
    NativeTokenUnregistered { chain: String, token_id: String },

    #[error("no registered token with id prefix '{prefix}'")]
    NoAssetMatch { prefix: String },

    #[error("currency {currency} does not match any token on chain '{chain}'")]
    UnknownCurrency { currency: String, chain: String },
}

/// A resolved token reference together with the transferred amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAsset {
    pub token: TokenInfo,
    pub value: u128,
}

/// What a concrete asset location points at, once the version-specific
/// wrapping is peeled off.
enum AssetKind {
    Native,
    PalletAssets(u128),
}

fn classify_v2(asset: &v2::MultiAsset) -> Result<(AssetKind, u128), TokenNotFoundError> {
    let v2::Fungibility::Fungible(value) = &asset.fun else {
        return Err(TokenNotFoundError::NotFungible);
    };
    let v2::AssetId::Concrete(location) = &asset.id else {
        return Err(TokenNotFoundError::AbstractAsset);
    };
    let kind = match &location.interior {
        v2::Junctions::Here => AssetKind::Native,
        v2::Junctions::X2(
            [v2::Junction::PalletInstance(ASSETS_PALLET_INSTANCE), v2::Junction::GeneralIndex(index)],
        ) => AssetKind::PalletAssets(*index),
        _ => return Err(TokenNotFoundError::UnsupportedAssetLocation("v2 interior")),
    };
    Ok((kind, *value))
}

fn classify_v3(asset: &v3::MultiAsset) -> Result<(AssetKind, u128), TokenNotFoundError> {
    let v3::Fungibility::Fungible(value) = &asset.fun else {
        return Err(TokenNotFoundError::NotFungible);
    };
    let v3::AssetId::Concrete(location) = &asset.id else {
        return Err(TokenNotFoundError::AbstractAsset);
    };
    let kind = match &location.interior {
        v3::Junctions::Here => AssetKind::Native,
        v3::Junctions::X2(
            [v3::Junction::PalletInstance(ASSETS_PALLET_INSTANCE), v3::Junction::GeneralIndex(index)],
        ) => AssetKind::PalletAssets(*index),
        _ => return Err(TokenNotFoundError::UnsupportedAssetLocation("v3 interior")),
    };
    Ok((kind, *value))
}

/// Resolve an XCM-pallet asset list issued on `chain`.
///
/// Only single-element, fungible, concrete assets are supported. `Here`
/// means the chain's own native token; the pallet-assets form
/// `X2[PalletInstance(50), GeneralIndex(id)]` is matched against registry
/// ids by the `{chain}-substrate-assets-{id}` prefix; the exact symbol
/// segment is not recoverable from the location alone.
pub fn resolve_assets(
    assets: &VersionedMultiAssets,
    chain: &ChainInfo,
    tokens: &TokenRegistry,
) -> Result<ResolvedAsset, TokenNotFoundError> {
    let (kind, value) = match assets {
        VersionedMultiAssets::V2(list) => match list.0.as_slice() {
            [asset] => classify_v2(asset)?,
            other => return Err(TokenNotFoundError::MultipleAssets { count: other.len() }),
        },
        VersionedMultiAssets::V3(list) => match list.0.as_slice() {
            [asset] => classify_v3(asset)?,
            other => return Err(TokenNotFoundError::MultipleAssets { count: other.len() }),
        },
    };

    let token = match kind {
        AssetKind::Native => {
            tokens
                .native_token(chain)
                .ok_or_else(|| TokenNotFoundError::NativeTokenUnregistered {
                    chain: chain.id.clone(),
                    token_id: chain.native_token_id.clone(),
                })?
        }
        AssetKind::PalletAssets(index) => {
            let prefix = format!("{}-substrate-assets-{}", chain.id, index);
            tokens.find_by_id_prefix(&prefix).ok_or_else(|| {
                tracing::debug!(%prefix, "no token with pallet-assets prefix");
                TokenNotFoundError::NoAssetMatch { prefix }
            })?
        }
    };

    Ok(ResolvedAsset {
        token: token.clone(),
        value,
    })
}

/// The opaque currency argument of an x-tokens transfer.
///
/// The argument's shape is chain-specific and not statically typed, so it
/// arrives as a dynamic value: a bare index, a bare symbol, or a
/// structured one-of-many currency id as the runtime spells it
/// (e.g. `{"VSToken": "KSM"}`).
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyId {
    Index(u128),
    Symbol(String),
    Structured(Value),
}

impl CurrencyId {
    /// Narrow a generically-decoded argument value. Anything that is not a
    /// non-negative integer, a string, or a map is not a currency id.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_u64().map(|n| CurrencyId::Index(n as u128)),
            Value::String(s) => Some(CurrencyId::Symbol(s.clone())),
            Value::Object(_) => Some(CurrencyId::Structured(value.clone())),
            _ => None,
        }
    }

    fn as_json(&self) -> Value {
        match self {
            CurrencyId::Index(n) => Value::from(u64::try_from(*n).unwrap_or(u64::MAX)),
            CurrencyId::Symbol(s) => Value::from(s.as_str()),
            CurrencyId::Structured(v) => v.clone(),
        }
    }
}

/// Lower-case object keys and string values, recursively. Absorbs
/// inconsistencies between registry spellings and runtime spellings of the
/// same currency id ("vsKSM" vs "vsksm", "Token" vs "token").
fn normalize(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::from(s.to_lowercase()),
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.to_lowercase(), normalize(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn matches_on_chain_id(currency: &CurrencyId, on_chain_id: &Value) -> bool {
    match currency {
        CurrencyId::Index(n) => on_chain_id.as_u64().is_some_and(|id| id as u128 == *n),
        CurrencyId::Symbol(s) => on_chain_id.as_str() == Some(s.as_str()),
        CurrencyId::Structured(v) => on_chain_id == v,
    }
}

/// Resolve an x-tokens currency argument issued on `chain`.
///
/// Matching precedence: index 0 is the chain's native token; then an exact
/// on-chain id match; then a case-insensitive symbol match against the
/// chain's native tokens; then normalized structural equality against
/// on-chain ids.
pub fn resolve_currency(
    currency: &CurrencyId,
    value: u128,
    chain: &ChainInfo,
    tokens: &TokenRegistry,
) -> Result<ResolvedAsset, TokenNotFoundError> {
    if let CurrencyId::Index(0) = currency {
        let token =
            tokens
                .native_token(chain)
                .ok_or_else(|| TokenNotFoundError::NativeTokenUnregistered {
                    chain: chain.id.clone(),
                    token_id: chain.native_token_id.clone(),
                })?;
        return Ok(ResolvedAsset {
            token: token.clone(),
            value,
        });
    }

    let exact = tokens.tokens_on_chain(&chain.id).find(|t| {
        t.on_chain_id
            .as_ref()
            .is_some_and(|id| matches_on_chain_id(currency, id))
    });

    let by_symbol = || {
        let CurrencyId::Symbol(symbol) = currency else {
            return None;
        };
        tokens
            .tokens_on_chain(&chain.id)
            .find(|t| t.is_native() && t.symbol.eq_ignore_ascii_case(symbol))
    };

    let structural = || {
        let wanted = normalize(&currency.as_json());
        tokens.tokens_on_chain(&chain.id).find(|t| {
            t.on_chain_id
                .as_ref()
                .is_some_and(|id| normalize(id) == wanted)
        })
    };

    let token = exact.or_else(by_symbol).or_else(structural).ok_or_else(|| {
        tracing::debug!(chain = %chain.id, currency = ?currency, "currency matched no token");
        TokenNotFoundError::UnknownCurrency {
            currency: format!("{currency:?}"),
            chain: chain.id.clone(),
        }
    })?;

    Ok(ResolvedAsset {
        token: token.clone(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_exact;
    use serde_json::json;
    use xcm_transfer_decoder_registry::ChainRegistry;

    fn chains() -> ChainRegistry {
        ChainRegistry::from_json_str(
            r#"[
            {"id": "statemint", "relayChain": "polkadot", "paraId": 1000, "ss58Prefix": 0,
             "nativeTokenId": "statemint-native-dot"},
            {"id": "bifrost", "relayChain": "kusama", "paraId": 2001, "ss58Prefix": 6,
             "nativeTokenId": "bifrost-native-bnc"}
        ]"#,
        )
        .unwrap()
    }

    fn tokens() -> TokenRegistry {
        TokenRegistry::from_json_str(
            r#"[
            {"id": "statemint-native-dot", "type": "native", "symbol": "DOT",
             "decimals": 10, "chain": "statemint"},
            {"id": "statemint-substrate-assets-1984-usdt", "type": "substrate-assets",
             "onChainId": 1984, "symbol": "USDt", "decimals": 6, "chain": "statemint"},
            {"id": "bifrost-native-bnc", "type": "native", "onChainId": {"Native": "BNC"},
             "symbol": "BNC", "decimals": 12, "chain": "bifrost"},
            {"id": "bifrost-orml-vsksm", "type": "orml", "onChainId": {"VSToken": "KSM"},
             "symbol": "vsKSM", "decimals": 12, "chain": "bifrost"}
        ]"#,
        )
        .unwrap()
    }

    fn statemint(chains: &ChainRegistry) -> &ChainInfo {
        chains.get("statemint").unwrap()
    }

    fn bifrost(chains: &ChainRegistry) -> &ChainInfo {
        chains.get("bifrost").unwrap()
    }

    #[test]
    fn test_concrete_here_resolves_native_token() {
        let (chains, tokens) = (chains(), tokens());
        // V2, one Concrete(Here) Fungible(1000000) asset
        let bytes = hex::decode("01040000000002093d00").unwrap();
        let assets: VersionedMultiAssets = decode_exact(&bytes).unwrap();
        let resolved = resolve_assets(&assets, statemint(&chains), &tokens).unwrap();
        assert_eq!(resolved.token.id, "statemint-native-dot");
        assert_eq!(resolved.value, 1_000_000);
    }

    #[test]
    fn test_pallet_assets_location_resolves_by_prefix() {
        let (chains, tokens) = (chains(), tokens());
        // V3, one asset at X2[PalletInstance(50), GeneralIndex(1984)], value 1000000
        let bytes = hex::decode("0304000002043205011f0002093d00").unwrap();
        let assets: VersionedMultiAssets = decode_exact(&bytes).unwrap();
        let resolved = resolve_assets(&assets, statemint(&chains), &tokens).unwrap();
        assert_eq!(resolved.token.id, "statemint-substrate-assets-1984-usdt");
        assert_eq!(resolved.token.symbol, "USDt");
        assert_eq!(resolved.value, 1_000_000);
    }

    #[test]
    fn test_pallet_assets_unregistered_fails() {
        let (chains, tokens) = (chains(), tokens());
        // GeneralIndex(7777): compact(7777) = (7777 << 2) | 0b01 = 0x7985 LE
        let bytes = hex::decode("030400000204320585790002093d00").unwrap();
        let assets: VersionedMultiAssets = decode_exact(&bytes).unwrap();
        let result = resolve_assets(&assets, statemint(&chains), &tokens);
        assert!(matches!(
            result,
            Err(TokenNotFoundError::NoAssetMatch { prefix })
                if prefix == "statemint-substrate-assets-7777"
        ));
    }

    #[test]
    fn test_multiple_assets_fail() {
        let (chains, tokens) = (chains(), tokens());
        // Two identical Concrete(Here) assets
        let bytes = hex::decode("01080000000002093d000000000002093d00").unwrap();
        let assets: VersionedMultiAssets = decode_exact(&bytes).unwrap();
        let result = resolve_assets(&assets, statemint(&chains), &tokens);
        assert!(matches!(
            result,
            Err(TokenNotFoundError::MultipleAssets { count: 2 })
        ));
    }

    #[test]
    fn test_non_fungible_fails() {
        let (chains, tokens) = (chains(), tokens());
        // Concrete(Here), NonFungible(Undefined)
        let bytes = hex::decode("01040000000100").unwrap();
        let assets: VersionedMultiAssets = decode_exact(&bytes).unwrap();
        let result = resolve_assets(&assets, statemint(&chains), &tokens);
        assert!(matches!(result, Err(TokenNotFoundError::NotFungible)));
    }

    #[test]
    fn test_abstract_asset_fails() {
        let (chains, tokens) = (chains(), tokens());
        // V2 Abstract(0x01020304), Fungible(1)
        let bytes = hex::decode("01040110010203040004").unwrap();
        let assets: VersionedMultiAssets = decode_exact(&bytes).unwrap();
        let result = resolve_assets(&assets, statemint(&chains), &tokens);
        assert!(matches!(result, Err(TokenNotFoundError::AbstractAsset)));
    }

    #[test]
    fn test_currency_index_zero_is_native() {
        let (chains, tokens) = (chains(), tokens());
        let resolved =
            resolve_currency(&CurrencyId::Index(0), 500, statemint(&chains), &tokens).unwrap();
        assert_eq!(resolved.token.id, "statemint-native-dot");
        assert_eq!(resolved.value, 500);
    }

    #[test]
    fn test_currency_exact_on_chain_id() {
        let (chains, tokens) = (chains(), tokens());
        let resolved =
            resolve_currency(&CurrencyId::Index(1984), 42, statemint(&chains), &tokens).unwrap();
        assert_eq!(resolved.token.id, "statemint-substrate-assets-1984-usdt");
    }

    #[test]
    fn test_currency_symbol_case_insensitive_native() {
        let (chains, tokens) = (chains(), tokens());
        let currency = CurrencyId::Symbol("bnc".to_string());
        let resolved = resolve_currency(&currency, 7, bifrost(&chains), &tokens).unwrap();
        assert_eq!(resolved.token.id, "bifrost-native-bnc");
    }

    #[test]
    fn test_currency_structured_normalized_match() {
        let (chains, tokens) = (chains(), tokens());
        // Key and value casing differ from the registry spelling
        let currency = CurrencyId::Structured(json!({"vstoken": "ksm"}));
        let resolved = resolve_currency(&currency, 9, bifrost(&chains), &tokens).unwrap();
        assert_eq!(resolved.token.id, "bifrost-orml-vsksm");
        assert_eq!(resolved.token.symbol, "vsKSM");
    }

    #[test]
    fn test_currency_no_match_fails() {
        let (chains, tokens) = (chains(), tokens());
        let currency = CurrencyId::Structured(json!({"Token": "ZZZ"}));
        let result = resolve_currency(&currency, 1, bifrost(&chains), &tokens);
        assert!(matches!(
            result,
            Err(TokenNotFoundError::UnknownCurrency { .. })
        ));
    }

    #[test]
    fn test_currency_from_value_narrowing() {
        assert_eq!(
            CurrencyId::from_value(&json!(1984)),
            Some(CurrencyId::Index(1984))
        );
        assert_eq!(
            CurrencyId::from_value(&json!("KSM")),
            Some(CurrencyId::Symbol("KSM".to_string()))
        );
        assert!(matches!(
            CurrencyId::from_value(&json!({"Token": "KSM"})),
            Some(CurrencyId::Structured(_))
        ));
        assert_eq!(CurrencyId::from_value(&json!(null)), None);
        assert_eq!(CurrencyId::from_value(&json!(-5)), None);
        assert_eq!(CurrencyId::from_value(&json!([1, 2])), None);
    }

    #[test]
    fn test_normalize_is_recursive() {
        let a = normalize(&json!({"VSToken": {"Inner": "AbC"}}));
        let b = normalize(&json!({"vstoken": {"inner": "abc"}}));
        assert_eq!(a, b);
    }
}
