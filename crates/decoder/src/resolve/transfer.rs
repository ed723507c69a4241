// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The transfer descriptor builder: the one entry point per call shape,
//! orchestrating location and asset resolution into a normalized
//! description of the transfer for the signing summary.
//!
//! XCM-pallet calls carry `dest`, `beneficiary` and `assets` as three
//! separate arguments; x-tokens calls carry one currency + amount and a
//! single `dest` whose interior encodes the beneficiary inline. Both
//! shapes funnel into the same output type.

use crate::codec::{self, DecodeError};
use crate::resolve::asset::{
    CurrencyId, ResolvedAsset, TokenNotFoundError, resolve_assets, resolve_currency,
};
use crate::resolve::location::{
    AccountRef, UnsupportedLocationError, resolve_location,
};
use crate::xcm::{VersionedMultiAssets, VersionedMultiLocation};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use xcm_transfer_decoder_registry::{ChainInfo, ChainRegistry, TokenRegistry};

#[derive(Debug, Error)]
pub enum TransferError {
    /// Registries are not populated yet; the caller re-invokes once they
    /// are. Every other variant is permanent for the given input.
    #[error("registries are not loaded yet")]
    NotReady,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Location(#[from] UnsupportedLocationError),

    #[error(transparent)]
    Token(#[from] TokenNotFoundError),
}

impl TransferError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransferError::NotReady)
    }
}

/// Read-only inputs shared by every parse call for one signing request.
#[derive(Debug, Clone, Copy)]
pub struct TransferContext<'a> {
    /// The chain the extrinsic is being signed for.
    pub origin: &'a ChainInfo,
    /// The signing account.
    pub sender: AccountRef,
    pub chains: &'a ChainRegistry,
    pub tokens: &'a TokenRegistry,
    /// Optional price snapshot keyed by token registry id.
    pub rates: Option<&'a HashMap<String, f64>>,
}

/// Normalized description of one cross-chain transfer. Built once per
/// signing request; the rendering layer owns it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDescriptor {
    /// Raw amount in the token's smallest unit, as a decimal string to
    /// survive JSON consumers that cannot hold a u128.
    #[serde(serialize_with = "amount_as_string")]
    pub value: u128,
    pub token_decimals: u8,
    pub token_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_rates: Option<f64>,
    pub from_network: String,
    pub from_address: String,
    pub to_network: String,
    pub to_address: String,
}

fn amount_as_string<S: serde::Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

fn ensure_ready(ctx: &TransferContext) -> Result<(), TransferError> {
    if ctx.chains.is_empty() || ctx.tokens.is_empty() {
        tracing::debug!("registries empty, transfer parse deferred");
        return Err(TransferError::NotReady);
    }
    Ok(())
}

fn descriptor(
    ctx: &TransferContext,
    to_chain: &ChainInfo,
    to_account: AccountRef,
    asset: ResolvedAsset,
) -> TransferDescriptor {
    TransferDescriptor {
        value: asset.value,
        token_decimals: asset.token.decimals,
        token_symbol: asset.token.symbol,
        token_logo: asset.token.logo,
        token_rates: ctx
            .rates
            .and_then(|rates| rates.get(&asset.token.id).copied()),
        from_network: ctx.origin.id.clone(),
        from_address: ctx.sender.to_address_on(ctx.origin),
        to_network: to_chain.id.clone(),
        to_address: to_account.to_address_on(to_chain),
    }
}

/// Parse an XCM-pallet transfer (`dest`, `beneficiary`, `assets` SCALE
/// argument buffers) into a descriptor.
pub fn parse_xcm_pallet_transfer(
    dest: &[u8],
    beneficiary: &[u8],
    assets: &[u8],
    ctx: &TransferContext,
) -> Result<TransferDescriptor, TransferError> {
    ensure_ready(ctx)?;

    let dest: VersionedMultiLocation = codec::decode_exact(dest)?;
    let beneficiary: VersionedMultiLocation = codec::decode_exact(beneficiary)?;
    let assets: VersionedMultiAssets = codec::decode_exact(assets)?;

    let target = resolve_location(&dest, ctx.origin, ctx.chains)?;
    // The beneficiary location's job is only to carry the account; its
    // chain contribution is the origin-relative default and is ignored.
    let beneficiary = resolve_location(&beneficiary, ctx.origin, ctx.chains)?;
    let account = beneficiary
        .account
        .ok_or(UnsupportedLocationError::IncompletePair { missing: "account" })?;
    let asset = resolve_assets(&assets, ctx.origin, ctx.tokens)?;

    Ok(descriptor(ctx, &target.chain, account, asset))
}

/// Parse an x-tokens transfer (`currency` argument already narrowed by the
/// caller, fixed-width `amount` buffer, combined `dest` buffer) into a
/// descriptor.
pub fn parse_x_tokens_transfer(
    currency: &CurrencyId,
    amount: &[u8],
    dest: &[u8],
    ctx: &TransferContext,
) -> Result<TransferDescriptor, TransferError> {
    ensure_ready(ctx)?;

    let amount = codec::decode_u128(amount)?;
    let dest: VersionedMultiLocation = codec::decode_exact(dest)?;

    let target = resolve_location(&dest, ctx.origin, ctx.chains)?;
    let account = target
        .account
        .ok_or(UnsupportedLocationError::IncompletePair { missing: "account" })?;
    let asset = resolve_currency(currency, amount, ctx.origin, ctx.tokens)?;

    Ok(descriptor(ctx, &target.chain, account, asset))
}
