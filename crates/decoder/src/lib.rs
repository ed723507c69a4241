// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding of versioned XCM location/asset descriptors carried inside
//! extrinsic call arguments, and their resolution into a concrete
//! cross-chain transfer description.
//!
//! The pipeline is pure and synchronous: SCALE bytes plus read-only
//! chain/token registry snapshots in, a [`resolve::transfer::TransferDescriptor`]
//! or a typed error out. Any shape outside the supported V2/V3 subset fails
//! cleanly rather than guessing; a wrong decode rendered to a signing
//! screen is worse than no decode.

pub mod codec;
pub mod resolve;
pub mod utils;
pub mod xcm;

pub use codec::DecodeError;
pub use resolve::asset::{CurrencyId, ResolvedAsset, TokenNotFoundError};
pub use resolve::location::{AccountRef, ResolvedLocation, UnsupportedLocationError};
pub use resolve::transfer::{TransferContext, TransferDescriptor, TransferError};
