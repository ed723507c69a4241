// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version-tagged XCM envelopes.
//!
//! `VersionedMultiLocation`/`VersionedMultiAssets` read one leading
//! discriminant and dispatch to the matching wire tree. Only V2 (tag 1) and
//! V3 (tag 3) are representable; the reserved V0/V1 tags and anything newer
//! fail to decode, which is the intended scope limit rather than an
//! oversight.

pub mod v2;
pub mod v3;

use parity_scale_codec::{Decode, Encode};

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum VersionedMultiLocation {
    #[codec(index = 1)]
    V2(v2::MultiLocation),
    #[codec(index = 3)]
    V3(v3::MultiLocation),
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum VersionedMultiAssets {
    #[codec(index = 1)]
    V2(v2::MultiAssets),
    #[codec(index = 3)]
    V3(v3::MultiAssets),
}

impl VersionedMultiLocation {
    pub fn parents(&self) -> u8 {
        match self {
            VersionedMultiLocation::V2(loc) => loc.parents,
            VersionedMultiLocation::V3(loc) => loc.parents,
        }
    }
}
