// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Unified error type for helper operations.
//!
//! Collaborator failures are wrapped unmodified; the helper adds only the
//! outcomes it owns: the settlement distinction between a definitive
//! on-chain rejection and an unobserved outcome, and the fatal
//! asset-not-found case after a mint. Nothing here is retried.

use std::time::Duration;

use crate::client::ChainError;
use crate::config::ConfigError;
use crate::keystore::KeyStoreError;
use crate::types::{PlatformAddress, Tracker};

/// Errors returned by [`Helper`](crate::helper::Helper) operations.
#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    /// Required configuration missing or invalid. Fatal at construction.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Key store failure, propagated unmodified.
    #[error("signing failed: {0}")]
    KeyStore(#[from] KeyStoreError),

    /// Chain client failure, propagated unmodified.
    #[error("chain client error: {0}")]
    Chain(#[from] ChainError),

    /// The chain has no sequence number for the account and none was
    /// supplied. The generic send path never guesses one.
    #[error("no sequence number on chain for account {0}")]
    SequenceUnavailable(PlatformAddress),

    /// Raw-secret submission with neither an explicit secret nor an
    /// injected default signer.
    #[error("no default signer configured and no secret supplied")]
    NoDefaultSigner,

    /// The transaction has no asset outputs and therefore no tracker.
    #[error("not an asset transaction")]
    NotAssetTransaction,

    /// The chain definitively refused the transaction during the
    /// settlement wait. Resubmitting the same transaction will fail again.
    #[error("transaction {tracker} was rejected on-chain: {reason}")]
    Rejected { tracker: Tracker, reason: String },

    /// No settlement outcome was observed within the fixed bound. The
    /// transaction may still settle; the caller decides whether to
    /// resubmit (sequence numbers are not re-derived here).
    #[error("no settlement outcome for {tracker} within {}s", .timeout.as_secs())]
    ConfirmationTimedOut { tracker: Tracker, timeout: Duration },

    /// The mint settled but no asset exists at output 0. Fatal for the
    /// call, never retried.
    #[error("failed to mint asset: nothing at output 0 of {tracker}")]
    MintFailed { tracker: Tracker },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_and_timeout_are_distinct() {
        let tracker = Tracker([0x22; 32]);
        let rejected = HelperError::Rejected {
            tracker,
            reason: "invalid input".into(),
        };
        let timed_out = HelperError::ConfirmationTimedOut {
            tracker,
            timeout: Duration::from_secs(300),
        };

        assert!(matches!(rejected, HelperError::Rejected { .. }));
        assert!(matches!(
            timed_out,
            HelperError::ConfirmationTimedOut { .. }
        ));
        assert!(rejected.to_string().contains("rejected"));
        assert!(timed_out.to_string().contains("300"));
    }

    #[test]
    fn config_errors_pass_through_transparently() {
        let err = HelperError::from(ConfigError::Missing(crate::config::RPC_URL_ENV));
        assert_eq!(err.to_string(), "RPC_URL is not specified");
    }
}
