// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain client boundary.
//!
//! [`ChainClient`] is the full set of SDK operations the helper consumes.
//! It is a trait so the embedding application supplies the concrete SDK
//! adapter and tests can swap in a stub; nothing here assumes a transport.

use async_trait::async_trait;

use crate::transaction::Transaction;
use crate::types::{Asset, PlatformAddress, Secret, ShardId, SignedTransaction, Tracker, TxHash};

/// Operations consumed from the wrapped chain SDK.
///
/// Implementations must be `Send + Sync`; the helper imposes no locking of
/// its own and callers may share one client across tasks.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Current sequence number for `account`.
    ///
    /// Returns `None` when the chain has no record of the account.
    async fn sequence(&self, account: &PlatformAddress) -> Result<Option<u64>, ChainError>;

    /// Sign `tx` locally with a raw secret, bypassing any key store.
    ///
    /// The SDK encodes the transaction with the given fee and sequence and
    /// produces the hash (and, for asset transactions, the tracker).
    async fn sign_with_secret(
        &self,
        tx: &Transaction,
        secret: &Secret,
        fee: u64,
        seq: u64,
    ) -> Result<SignedTransaction, ChainError>;

    /// Broadcast a signed transaction and return its hash.
    async fn broadcast(&self, tx: &SignedTransaction) -> Result<TxHash, ChainError>;

    /// One settlement poll for the transaction identified by `tracker`.
    ///
    /// Returns `Some` per-output success flags once an outcome has been
    /// observed, `None` while the transaction is still pending, and
    /// [`ChainError::Rejected`] once the chain has definitively refused it.
    async fn settlement_results(&self, tracker: &Tracker)
        -> Result<Option<Vec<bool>>, ChainError>;

    /// Look up the asset produced at `index` of the transaction identified
    /// by `tracker` within `shard_id`.
    async fn asset(
        &self,
        tracker: &Tracker,
        shard_id: ShardId,
        index: usize,
    ) -> Result<Option<Asset>, ChainError>;
}

/// Errors reported by a chain client implementation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// The SDK refused the transaction shape before broadcast.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// The chain definitively refused the transaction.
    #[error("transaction rejected by the chain: {0}")]
    Rejected(String),

    /// Transport or node failure. Not retried by the helper.
    #[error("RPC error: {0}")]
    Rpc(String),
}
