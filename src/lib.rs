// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction composition, signing, and submission helper.
//!
//! A thin layer over an external chain SDK: build a typed request, sign it
//! through the configured trust boundary, broadcast it, and optionally
//! wait for the settlement outcome. Consensus, cryptography, transaction
//! encoding, and the RPC transport all live behind the two collaborator
//! traits; this crate owns only the submission and confirmation protocol.
//!
//! ## Modules
//!
//! - `helper` - The submission helper and its option surfaces
//! - `client` - Chain client boundary ([`ChainClient`])
//! - `keystore` - Key store boundary ([`KeyStore`])
//! - `config` - Validated configuration, env-var loading
//! - `transaction` - Typed chain actions (pay, mint, transfer)
//! - `types` - Chain primitives (addresses, hashes, trackers, assets)
//! - `error` - Unified error taxonomy
//!
//! ## Usage
//!
//! ```no_run
//! # async fn example(
//! #     client: impl chain_helper::ChainClient,
//! #     key_store: impl chain_helper::KeyStore,
//! # ) -> Result<(), chain_helper::HelperError> {
//! use chain_helper::{Helper, HelperConfig, MintParams};
//!
//! let config = HelperConfig::from_env()?;
//! let helper = Helper::new(config, client, key_store);
//!
//! let asset = helper.mint_asset(MintParams::new(100)).await?;
//! println!("minted {} units to {}", asset.supply, asset.address);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod helper;
pub mod keystore;
pub mod transaction;
pub mod types;

pub use client::{ChainClient, ChainError};
pub use config::{ConfigError, DefaultSigner, HelperConfig};
pub use error::HelperError;
pub use helper::{
    AssetSendOptions, AssetSubmission, Helper, MintParams, SendOptions, SigningMethod,
    CONFIRMATION_TIMEOUT, DEFAULT_FEE,
};
pub use keystore::{KeyStore, KeyStoreError};
pub use transaction::{MintAsset, OutPoint, Transaction, TransferAsset, TransferInput, TransferOutput};
pub use types::{
    Asset, AssetAddress, AssetScheme, PlatformAddress, Secret, ShardId, Signature,
    SignedTransaction, Tracker, TxHash,
};
