// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Key store boundary.
//!
//! The helper never owns key generation or signing; it delegates both to an
//! externally supplied [`KeyStore`]. Production implementations wrap the
//! SDK's managed key storage.

use async_trait::async_trait;

use crate::transaction::{Transaction, TransferAsset};
use crate::types::{AssetAddress, PlatformAddress, SignedTransaction};

/// Capability to derive receiving addresses and sign with managed keys.
///
/// Implementations must be `Send + Sync` so one store can serve concurrent
/// helper calls.
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// Derive a single-signature pay-to-key-hash receiving address.
    ///
    /// # Errors
    ///
    /// Fails only if the backing store fails.
    async fn create_address(&self) -> Result<AssetAddress, KeyStoreError>;

    /// Sign `tx` with the key held for `account`, at the given fee and
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns [`KeyStoreError::KeyNotFound`] when `account` has no key in
    /// this store.
    async fn sign_transaction(
        &self,
        tx: &Transaction,
        account: &PlatformAddress,
        fee: u64,
        seq: u64,
    ) -> Result<SignedTransaction, KeyStoreError>;

    /// Sign the input at `index` of a transfer in place, filling only that
    /// input's signature slot.
    async fn sign_transfer_input(
        &self,
        tx: &mut TransferAsset,
        index: usize,
    ) -> Result<(), KeyStoreError>;
}

/// Errors reported by a key store implementation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KeyStoreError {
    /// No key material held for the account.
    #[error("no key found for account {0}")]
    KeyNotFound(PlatformAddress),

    /// The transfer has fewer inputs than the requested index.
    #[error("transfer input index {index} out of range ({inputs} inputs)")]
    InputOutOfRange { index: usize, inputs: usize },

    /// The backing store failed.
    #[error("key store failure: {0}")]
    Backend(String),
}
