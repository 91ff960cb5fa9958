// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Helper Configuration
//!
//! Configuration is an explicit struct handed to the helper at
//! construction. Validation happens once, here; nothing re-reads settings
//! later. [`HelperConfig::from_env`] covers the deployment surface.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `RPC_URL` | Chain node RPC endpoint | Required |
//! | `NETWORK_ID` | Network identifier baked into transactions | Required |
//! | `TEST_SIGNER_ADDRESS` | Funded seed account for raw-secret submission | Optional |
//! | `TEST_SIGNER_SECRET` | Raw secret for the seed account | Optional |
//!
//! The two `TEST_SIGNER_*` variables must be set together or not at all.

use url::Url;

use crate::types::{PlatformAddress, Secret};

/// Environment variable name for the chain node RPC endpoint.
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Environment variable name for the network identifier.
pub const NETWORK_ID_ENV: &str = "NETWORK_ID";

/// Environment variable name for the default signer's account address.
pub const TEST_SIGNER_ADDRESS_ENV: &str = "TEST_SIGNER_ADDRESS";

/// Environment variable name for the default signer's raw secret.
pub const TEST_SIGNER_SECRET_ENV: &str = "TEST_SIGNER_SECRET";

/// Signer used when an asset transaction is submitted without an explicit
/// secret.
///
/// This is the funded seed account of a disposable test network. Injecting
/// one is the opt-in for that affordance; the crate ships no built-in
/// value, and submission without either an injected signer or an explicit
/// secret fails with
/// [`HelperError::NoDefaultSigner`](crate::error::HelperError::NoDefaultSigner).
/// Never configure this against a production network.
#[derive(Debug, Clone)]
pub struct DefaultSigner {
    /// Platform account the sequence lookup runs against.
    pub account: PlatformAddress,
    /// Raw secret used for signing.
    pub secret: Secret,
}

impl DefaultSigner {
    pub fn new(account: PlatformAddress, secret: Secret) -> Self {
        Self { account, secret }
    }
}

/// Validated helper configuration.
#[derive(Debug, Clone)]
pub struct HelperConfig {
    rpc_url: String,
    network_id: String,
    default_signer: Option<DefaultSigner>,
}

impl HelperConfig {
    /// Build a configuration, validating both required fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending field when the RPC
    /// URL is absent or unparseable, or the network identifier is absent.
    pub fn new(
        rpc_url: impl Into<String>,
        network_id: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let rpc_url = rpc_url.into();
        if rpc_url.trim().is_empty() {
            return Err(ConfigError::Missing(RPC_URL_ENV));
        }
        Url::parse(&rpc_url).map_err(|e| ConfigError::InvalidRpcUrl(e.to_string()))?;

        let network_id = network_id.into();
        if network_id.trim().is_empty() {
            return Err(ConfigError::Missing(NETWORK_ID_ENV));
        }

        Ok(Self {
            rpc_url,
            network_id,
            default_signer: None,
        })
    }

    /// Inject the default signer for raw-secret submission.
    pub fn with_default_signer(mut self, signer: DefaultSigner) -> Self {
        self.default_signer = Some(signer);
        self
    }

    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Load configuration through an injectable variable lookup.
    ///
    /// Missing required variables and a half-configured test signer are
    /// both construction-time errors.
    pub fn from_env_with(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let rpc_url = lookup(RPC_URL_ENV).ok_or(ConfigError::Missing(RPC_URL_ENV))?;
        let network_id = lookup(NETWORK_ID_ENV).ok_or(ConfigError::Missing(NETWORK_ID_ENV))?;
        let mut config = Self::new(rpc_url, network_id)?;

        match (
            lookup(TEST_SIGNER_ADDRESS_ENV),
            lookup(TEST_SIGNER_SECRET_ENV),
        ) {
            (Some(address), Some(secret)) => {
                config.default_signer = Some(DefaultSigner::new(
                    PlatformAddress::from(address),
                    Secret::new(secret),
                ));
            }
            (None, None) => {}
            _ => return Err(ConfigError::PartialDefaultSigner),
        }

        Ok(config)
    }

    /// RPC endpoint of the chain node.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Network identifier baked into every transaction.
    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    /// The injected default signer, if any.
    pub fn default_signer(&self) -> Option<&DefaultSigner> {
        self.default_signer.as_ref()
    }
}

/// Fatal configuration errors, surfaced at construction only.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// A required setting is absent or empty.
    #[error("{0} is not specified")]
    Missing(&'static str),

    /// The RPC URL is present but not a parseable URL.
    #[error("invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    /// Exactly one of the two test-signer variables is set.
    #[error("default signer requires both {TEST_SIGNER_ADDRESS_ENV} and {TEST_SIGNER_SECRET_ENV}")]
    PartialDefaultSigner,
}
