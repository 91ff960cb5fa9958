// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Typed representations of the chain actions the helper composes.
//!
//! These are request shapes only. Wire encoding, hashing, and signature
//! layout are the SDK's concern and are reached through the
//! [`ChainClient`](crate::client::ChainClient) and
//! [`KeyStore`](crate::keystore::KeyStore) boundaries.

use serde::{Deserialize, Serialize};

use crate::types::{AssetAddress, AssetScheme, PlatformAddress, Signature, Tracker};

/// A chain action submitted through the helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transaction {
    /// Direct value transfer between platform accounts.
    Pay {
        receiver: PlatformAddress,
        quantity: u64,
    },
    /// Issue a new fungible asset into a shard.
    MintAsset(MintAsset),
    /// Move previously minted assets between asset addresses.
    TransferAsset(TransferAsset),
}

impl Transaction {
    /// Whether this action produces or consumes asset outputs and therefore
    /// has a settlement tracker.
    pub fn is_asset_transaction(&self) -> bool {
        matches!(self, Self::MintAsset(_) | Self::TransferAsset(_))
    }
}

/// Mint a fungible asset and hand the whole supply to `recipient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintAsset {
    pub scheme: AssetScheme,
    pub recipient: AssetAddress,
}

/// Transfer asset outputs. Each input must be signed individually before
/// broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferAsset {
    pub inputs: Vec<TransferInput>,
    pub outputs: Vec<TransferOutput>,
}

/// One consumed asset output plus its unlock signature slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInput {
    /// The output being spent.
    pub prev_out: OutPoint,
    /// Filled in by input signing; `None` until then.
    pub signature: Option<Signature>,
}

impl TransferInput {
    pub fn new(prev_out: OutPoint) -> Self {
        Self {
            prev_out,
            signature: None,
        }
    }
}

/// Reference to an asset output: the producing transaction's tracker and
/// the output slot within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    pub tracker: Tracker,
    pub index: usize,
}

/// One produced asset output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutput {
    pub address: AssetAddress,
    pub quantity: u64,
}
