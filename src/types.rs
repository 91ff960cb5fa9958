// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain primitives shared across the helper.
//!
//! Address and key formats are owned by the wrapped SDK; this crate treats
//! them as opaque values and only gives 32-byte identifiers a hex surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Shard partition identifier for asset scoping.
pub type ShardId = u16;

/// Platform account address (fee payer, sequence holder).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformAddress(String);

impl PlatformAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlatformAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for PlatformAddress {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

/// Asset receiving address, derived from a single public key hash (P2PKH).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetAddress(String);

impl AssetAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for AssetAddress {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

/// Raw signing key, hex-encoded at the boundary.
///
/// The `Debug` output is redacted so key material never ends up in logs or
/// panic messages.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// The hex-encoded key, for handing to the SDK's signer.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// Hash identifying a signed transaction on the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash(pub [u8; 32]);

/// Identifier used to look up the settlement outcome of an asset
/// transaction. Unlike [`TxHash`] it is derived from the unsigned body, so
/// it is stable across re-signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tracker(pub [u8; 32]);

/// Error parsing a 32-byte hex identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("expected 64 hex characters")]
pub struct ParseIdError;

fn parse_hex32(value: &str) -> Result<[u8; 32], ParseIdError> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(value).map_err(|_| ParseIdError)?;
    bytes.try_into().map_err(|_| ParseIdError)
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for TxHash {
    type Err = ParseIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_hex32(value).map(Self)
    }
}

impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Tracker {
    type Err = ParseIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_hex32(value).map(Self)
    }
}

impl Serialize for Tracker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tracker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Issuance scheme for a fungible asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetScheme {
    /// Shard the asset lives in.
    pub shard_id: ShardId,
    /// Free-form metadata attached at mint time (often a JSON document).
    pub metadata: String,
    /// Total number of units issued.
    pub supply: u64,
}

/// A minted asset as reported by the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Tracker of the transaction that produced this asset.
    pub tracker: Tracker,
    /// Output slot within that transaction.
    pub output_index: usize,
    /// Shard the asset lives in.
    pub shard_id: ShardId,
    /// Units held at this output.
    pub supply: u64,
    /// Address controlling the output.
    pub address: AssetAddress,
}

/// Opaque signature bytes produced by a signer for one transfer input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(pub Vec<u8>);

/// An SDK-encoded signed transaction, ready for broadcast.
///
/// The payload bytes are opaque to this crate; encoding is the SDK's
/// concern. Asset transactions additionally carry their tracker.
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    /// SDK wire encoding of the signed transaction.
    pub payload: Vec<u8>,
    /// Hash identifying the signed transaction.
    pub hash: TxHash,
    /// Settlement tracker, present for asset transactions.
    pub tracker: Option<Tracker>,
}
