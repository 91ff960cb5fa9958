// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The submission helper.
//!
//! [`Helper`] composes transactions and drives them through the chain
//! client: construct → sign → broadcast → (optionally) wait for the
//! settlement outcome. Control flow is strictly linear per call; the only
//! state is the validated configuration and the two collaborator handles
//! captured at construction.
//!
//! Signing always goes through one dispatch over [`SigningMethod`], so the
//! trust boundary in use (managed key store vs. raw secret) is explicit at
//! every call site.

use std::time::Duration;

use tracing::{debug, warn};

use crate::client::{ChainClient, ChainError};
use crate::config::HelperConfig;
use crate::error::HelperError;
use crate::keystore::KeyStore;
use crate::transaction::{MintAsset, Transaction, TransferAsset};
use crate::types::{
    Asset, AssetAddress, AssetScheme, PlatformAddress, Secret, ShardId, SignedTransaction,
    Tracker, TxHash,
};

/// Fee attached when a caller does not specify one.
pub const DEFAULT_FEE: u64 = 10;

/// Fixed bound on the settlement wait. Expiry is surfaced to the caller;
/// there is no retry or cancellation hook.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(300);

/// Delay between settlement polls.
const SETTLEMENT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Shard newly minted assets are scoped to.
const MINT_SHARD: ShardId = 0;

/// Which trust boundary signs a transaction.
#[derive(Debug, Clone)]
pub enum SigningMethod {
    /// Sign through the key store with the key held for an account.
    KeyStoreAccount(PlatformAddress),
    /// Sign locally with a raw secret, bypassing the key store.
    RawSecret(Secret),
}

/// Options for [`Helper::send_transaction`].
#[derive(Debug, Clone)]
pub struct SendOptions {
    /// Account that pays the fee and owns the sequence number.
    pub account: PlatformAddress,
    /// Transaction fee. Defaults to [`DEFAULT_FEE`].
    pub fee: u64,
    /// Sequence number. `None` fetches the live value before signing.
    pub seq: Option<u64>,
}

impl SendOptions {
    pub fn new(account: impl Into<PlatformAddress>) -> Self {
        Self {
            account: account.into(),
            fee: DEFAULT_FEE,
            seq: None,
        }
    }

    pub fn with_fee(mut self, fee: u64) -> Self {
        self.fee = fee;
        self
    }

    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = Some(seq);
        self
    }
}

/// Options for [`Helper::send_asset_transaction`].
///
/// Every recognized option and its default lives here; there are no
/// hidden fallbacks elsewhere.
#[derive(Debug, Clone)]
pub struct AssetSendOptions {
    /// Sequence number. `None` fetches the default signer's live value,
    /// falling back to 0 when the chain reports none.
    pub seq: Option<u64>,
    /// Transaction fee. Defaults to [`DEFAULT_FEE`].
    pub fee: u64,
    /// Wait for the settlement outcome after broadcast. Defaults to true.
    pub await_result: bool,
    /// Raw secret to sign with. `None` uses the injected default signer.
    pub secret: Option<Secret>,
}

impl Default for AssetSendOptions {
    fn default() -> Self {
        Self {
            seq: None,
            fee: DEFAULT_FEE,
            await_result: true,
            secret: None,
        }
    }
}

impl AssetSendOptions {
    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = Some(seq);
        self
    }

    pub fn with_fee(mut self, fee: u64) -> Self {
        self.fee = fee;
        self
    }

    pub fn with_await_result(mut self, await_result: bool) -> Self {
        self.await_result = await_result;
        self
    }

    pub fn with_secret(mut self, secret: Secret) -> Self {
        self.secret = Some(secret);
        self
    }
}

/// Parameters for [`Helper::mint_asset`].
#[derive(Debug, Clone)]
pub struct MintParams {
    /// Units to issue.
    pub supply: u64,
    /// Receiving address. `None` derives a fresh P2PKH address.
    pub recipient: Option<AssetAddress>,
    /// Raw secret to sign with. `None` uses the injected default signer.
    pub secret: Option<Secret>,
    /// Sequence number override.
    pub seq: Option<u64>,
    /// Metadata attached to the asset scheme. Defaults to empty.
    pub metadata: String,
}

impl MintParams {
    pub fn new(supply: u64) -> Self {
        Self {
            supply,
            recipient: None,
            secret: None,
            seq: None,
            metadata: String::new(),
        }
    }

    pub fn with_recipient(mut self, recipient: impl Into<AssetAddress>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn with_secret(mut self, secret: Secret) -> Self {
        self.secret = Some(secret);
        self
    }

    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = Some(seq);
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = metadata.into();
        self
    }
}

/// Outcome of an asset-transaction submission.
#[derive(Debug, Clone)]
pub struct AssetSubmission {
    /// Hash of the broadcast transaction.
    pub hash: TxHash,
    /// Settlement tracker of the transaction.
    pub tracker: Tracker,
    /// Per-output success flags, when the settlement wait was requested.
    pub results: Option<Vec<bool>>,
}

/// Transaction composition and submission over a chain client and a key
/// store.
pub struct Helper<C, K> {
    config: HelperConfig,
    client: C,
    key_store: K,
}

impl<C: ChainClient, K: KeyStore> Helper<C, K> {
    /// Build a helper from a validated configuration and the two
    /// collaborators. All three are captured immutably.
    pub fn new(config: HelperConfig, client: C, key_store: K) -> Self {
        Self {
            config,
            client,
            key_store,
        }
    }

    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// Derive a fresh single-signature P2PKH receiving address from the
    /// key store.
    pub async fn create_address(&self) -> Result<AssetAddress, HelperError> {
        Ok(self.key_store.create_address().await?)
    }

    /// Sign and broadcast a transaction through the key store.
    ///
    /// When `seq` is not supplied, the live sequence number for the
    /// account is fetched first; an account the chain does not know is an
    /// error rather than a guessed sequence. Returns the transaction hash.
    pub async fn send_transaction(
        &self,
        tx: &Transaction,
        options: SendOptions,
    ) -> Result<TxHash, HelperError> {
        let SendOptions { account, fee, seq } = options;
        let seq = match seq {
            Some(seq) => seq,
            None => self
                .client
                .sequence(&account)
                .await?
                .ok_or_else(|| HelperError::SequenceUnavailable(account.clone()))?,
        };

        let signed = self
            .sign(tx, &SigningMethod::KeyStoreAccount(account), fee, seq)
            .await?;
        let hash = self.client.broadcast(&signed).await?;
        debug!(%hash, fee, seq, "transaction broadcast");
        Ok(hash)
    }

    /// Sign an asset transaction with a raw secret and broadcast it.
    ///
    /// The secret defaults to the injected
    /// [`DefaultSigner`](crate::config::DefaultSigner); submission without
    /// either fails loudly. When `await_result` is set the call blocks on
    /// the settlement outcome, bounded by [`CONFIRMATION_TIMEOUT`].
    pub async fn send_asset_transaction(
        &self,
        tx: &Transaction,
        options: AssetSendOptions,
    ) -> Result<AssetSubmission, HelperError> {
        if !tx.is_asset_transaction() {
            return Err(HelperError::NotAssetTransaction);
        }
        let AssetSendOptions {
            seq,
            fee,
            await_result,
            secret,
        } = options;

        let secret = match secret {
            Some(secret) => secret,
            None => {
                let signer = self
                    .config
                    .default_signer()
                    .ok_or(HelperError::NoDefaultSigner)?;
                warn!(account = %signer.account, "signing with the injected default signer");
                signer.secret.clone()
            }
        };

        let seq = match seq {
            Some(seq) => seq,
            None => {
                // Sequence lookups on this path always target the injected
                // signer's account. Callers signing with a foreign secret
                // supply their own sequence.
                let signer = self
                    .config
                    .default_signer()
                    .ok_or(HelperError::NoDefaultSigner)?;
                self.client.sequence(&signer.account).await?.unwrap_or(0)
            }
        };

        let signed = self
            .sign(tx, &SigningMethod::RawSecret(secret), fee, seq)
            .await?;
        let tracker = signed.tracker.ok_or_else(|| {
            HelperError::Chain(ChainError::InvalidTransaction(
                "signer returned no tracker for an asset transaction".into(),
            ))
        })?;

        let hash = self.client.broadcast(&signed).await?;
        debug!(%hash, %tracker, fee, seq, "asset transaction broadcast");

        let results = if await_result {
            Some(self.wait_for_settlement(&tracker).await?)
        } else {
            None
        };

        Ok(AssetSubmission {
            hash,
            tracker,
            results,
        })
    }

    /// Mint a fungible asset in shard 0 and return it once it exists
    /// on-chain.
    ///
    /// The recipient defaults to a freshly derived P2PKH address. After
    /// the settlement wait the asset is looked up at output 0 of the mint
    /// tracker; a miss is [`HelperError::MintFailed`], not a value to
    /// retry against.
    pub async fn mint_asset(&self, params: MintParams) -> Result<Asset, HelperError> {
        let MintParams {
            supply,
            recipient,
            secret,
            seq,
            metadata,
        } = params;

        let recipient = match recipient {
            Some(recipient) => recipient,
            None => self.create_address().await?,
        };

        let tx = Transaction::MintAsset(MintAsset {
            scheme: AssetScheme {
                shard_id: MINT_SHARD,
                metadata,
                supply,
            },
            recipient,
        });

        let submission = self
            .send_asset_transaction(
                &tx,
                AssetSendOptions {
                    seq,
                    secret,
                    ..Default::default()
                },
            )
            .await?;

        let asset = self.client.asset(&submission.tracker, MINT_SHARD, 0).await?;
        asset.ok_or(HelperError::MintFailed {
            tracker: submission.tracker,
        })
    }

    /// Sign one input slot of a transfer in place through the key store.
    ///
    /// Only the signature at `index` is touched.
    pub async fn sign_transaction_input(
        &self,
        tx: &mut TransferAsset,
        index: usize,
    ) -> Result<(), HelperError> {
        Ok(self.key_store.sign_transfer_input(tx, index).await?)
    }

    /// The single signing dispatch. Every signature this helper produces
    /// goes through here, so the boundary in use is always explicit.
    async fn sign(
        &self,
        tx: &Transaction,
        method: &SigningMethod,
        fee: u64,
        seq: u64,
    ) -> Result<SignedTransaction, HelperError> {
        match method {
            SigningMethod::KeyStoreAccount(account) => Ok(self
                .key_store
                .sign_transaction(tx, account, fee, seq)
                .await?),
            SigningMethod::RawSecret(secret) => {
                Ok(self.client.sign_with_secret(tx, secret, fee, seq).await?)
            }
        }
    }

    /// Poll for the settlement outcome of `tracker` until observed,
    /// bounded by [`CONFIRMATION_TIMEOUT`].
    ///
    /// The bound wraps the whole loop, so it holds even against a client
    /// call that never returns. A definitive rejection and an expired
    /// wait are distinct outcomes; the caller's correct follow-up differs
    /// (a rejected transaction will fail again, a timed-out one may still
    /// settle).
    async fn wait_for_settlement(&self, tracker: &Tracker) -> Result<Vec<bool>, HelperError> {
        let poll = async {
            loop {
                match self.client.settlement_results(tracker).await {
                    Ok(Some(flags)) => return Ok(flags),
                    Ok(None) => tokio::time::sleep(SETTLEMENT_POLL_INTERVAL).await,
                    Err(ChainError::Rejected(reason)) => {
                        return Err(HelperError::Rejected {
                            tracker: *tracker,
                            reason,
                        })
                    }
                    Err(err) => return Err(HelperError::Chain(err)),
                }
            }
        };

        match tokio::time::timeout(CONFIRMATION_TIMEOUT, poll).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(%tracker, "settlement wait expired");
                Err(HelperError::ConfirmationTimedOut {
                    tracker: *tracker,
                    timeout: CONFIRMATION_TIMEOUT,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::config::DefaultSigner;
    use crate::keystore::KeyStoreError;
    use crate::transaction::{OutPoint, TransferInput, TransferOutput};
    use crate::types::Signature;

    const SEED_ACCOUNT: &str = "tccqseedaccount";
    const DERIVED_ADDRESS: &str = "tcaqfreshaddress";

    fn seed_secret() -> Secret {
        Secret::new("ab".repeat(32))
    }

    fn test_config() -> HelperConfig {
        HelperConfig::new("http://localhost:8080", "tc")
            .unwrap()
            .with_default_signer(DefaultSigner::new(
                PlatformAddress::from(SEED_ACCOUNT),
                seed_secret(),
            ))
    }

    /// Deterministic stand-in for SDK-side signing: the fee and sequence
    /// are stamped into the hash so tests can observe what was signed.
    fn fake_signed(tx: &Transaction, fee: u64, seq: u64) -> SignedTransaction {
        let mut hash = [0u8; 32];
        hash[0] = fee as u8;
        hash[1] = seq as u8;
        SignedTransaction {
            payload: vec![0xde, 0xad],
            hash: TxHash(hash),
            tracker: tx.is_asset_transaction().then(|| Tracker([0x33; 32])),
        }
    }

    enum Settlement {
        Settled(Vec<bool>),
        Pending,
        Rejected(&'static str),
    }

    struct StubClient {
        sequence: Option<u64>,
        sequence_calls: AtomicUsize,
        raw_signs: Mutex<Vec<(Transaction, u64, u64)>>,
        broadcasts: Mutex<Vec<SignedTransaction>>,
        settlement: Settlement,
        asset: Option<Asset>,
    }

    impl StubClient {
        fn new() -> Self {
            Self {
                sequence: Some(7),
                sequence_calls: AtomicUsize::new(0),
                raw_signs: Mutex::new(Vec::new()),
                broadcasts: Mutex::new(Vec::new()),
                settlement: Settlement::Settled(vec![true]),
                asset: None,
            }
        }

        fn sequence_call_count(&self) -> usize {
            self.sequence_calls.load(Ordering::SeqCst)
        }

        fn broadcast_count(&self) -> usize {
            self.broadcasts.lock().unwrap().len()
        }

        fn last_raw_sign(&self) -> (Transaction, u64, u64) {
            self.raw_signs.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl ChainClient for StubClient {
        async fn sequence(
            &self,
            _account: &PlatformAddress,
        ) -> Result<Option<u64>, ChainError> {
            self.sequence_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.sequence)
        }

        async fn sign_with_secret(
            &self,
            tx: &Transaction,
            _secret: &Secret,
            fee: u64,
            seq: u64,
        ) -> Result<SignedTransaction, ChainError> {
            self.raw_signs.lock().unwrap().push((tx.clone(), fee, seq));
            Ok(fake_signed(tx, fee, seq))
        }

        async fn broadcast(&self, tx: &SignedTransaction) -> Result<TxHash, ChainError> {
            self.broadcasts.lock().unwrap().push(tx.clone());
            Ok(tx.hash)
        }

        async fn settlement_results(
            &self,
            _tracker: &Tracker,
        ) -> Result<Option<Vec<bool>>, ChainError> {
            match &self.settlement {
                Settlement::Settled(flags) => Ok(Some(flags.clone())),
                Settlement::Pending => Ok(None),
                Settlement::Rejected(reason) => Err(ChainError::Rejected((*reason).into())),
            }
        }

        async fn asset(
            &self,
            tracker: &Tracker,
            shard_id: ShardId,
            index: usize,
        ) -> Result<Option<Asset>, ChainError> {
            Ok(self.asset.clone().map(|mut asset| {
                asset.tracker = *tracker;
                asset.shard_id = shard_id;
                asset.output_index = index;
                asset
            }))
        }
    }

    struct StubKeyStore {
        known_account: PlatformAddress,
        signed: Mutex<Vec<(PlatformAddress, u64, u64)>>,
    }

    impl StubKeyStore {
        fn new() -> Self {
            Self {
                known_account: PlatformAddress::from(SEED_ACCOUNT),
                signed: Mutex::new(Vec::new()),
            }
        }

        fn signed_count(&self) -> usize {
            self.signed.lock().unwrap().len()
        }

        fn last_signed(&self) -> (PlatformAddress, u64, u64) {
            self.signed.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl KeyStore for StubKeyStore {
        async fn create_address(&self) -> Result<AssetAddress, KeyStoreError> {
            Ok(AssetAddress::from(DERIVED_ADDRESS))
        }

        async fn sign_transaction(
            &self,
            tx: &Transaction,
            account: &PlatformAddress,
            fee: u64,
            seq: u64,
        ) -> Result<SignedTransaction, KeyStoreError> {
            if account != &self.known_account {
                return Err(KeyStoreError::KeyNotFound(account.clone()));
            }
            self.signed
                .lock()
                .unwrap()
                .push((account.clone(), fee, seq));
            Ok(fake_signed(tx, fee, seq))
        }

        async fn sign_transfer_input(
            &self,
            tx: &mut TransferAsset,
            index: usize,
        ) -> Result<(), KeyStoreError> {
            let inputs = tx.inputs.len();
            let input = tx
                .inputs
                .get_mut(index)
                .ok_or(KeyStoreError::InputOutOfRange { index, inputs })?;
            input.signature = Some(Signature(vec![index as u8]));
            Ok(())
        }
    }

    fn helper(client: StubClient) -> Helper<StubClient, StubKeyStore> {
        Helper::new(test_config(), client, StubKeyStore::new())
    }

    fn pay_tx() -> Transaction {
        Transaction::Pay {
            receiver: PlatformAddress::from("tccqreceiver"),
            quantity: 5,
        }
    }

    fn transfer_tx(inputs: usize) -> TransferAsset {
        TransferAsset {
            inputs: (0..inputs)
                .map(|index| {
                    TransferInput::new(OutPoint {
                        tracker: Tracker([0x44; 32]),
                        index,
                    })
                })
                .collect(),
            outputs: vec![TransferOutput {
                address: AssetAddress::from(DERIVED_ADDRESS),
                quantity: 1,
            }],
        }
    }

    #[tokio::test]
    async fn create_address_comes_from_key_store() {
        let helper = helper(StubClient::new());
        let address = helper.create_address().await.unwrap();
        assert_eq!(address, AssetAddress::from(DERIVED_ADDRESS));
    }

    #[tokio::test]
    async fn explicit_seq_skips_sequence_lookup() {
        let helper = helper(StubClient::new());
        helper
            .send_transaction(&pay_tx(), SendOptions::new(SEED_ACCOUNT).with_seq(3))
            .await
            .unwrap();

        assert_eq!(helper.client.sequence_call_count(), 0);
        assert_eq!(helper.key_store.last_signed(), (SEED_ACCOUNT.into(), DEFAULT_FEE, 3));
        assert_eq!(helper.client.broadcast_count(), 1);
    }

    #[tokio::test]
    async fn omitted_seq_fetches_exactly_once_before_signing() {
        let helper = helper(StubClient::new());
        helper
            .send_transaction(&pay_tx(), SendOptions::new(SEED_ACCOUNT))
            .await
            .unwrap();

        assert_eq!(helper.client.sequence_call_count(), 1);
        // The stub chain reports sequence 7; that is what must be signed.
        assert_eq!(helper.key_store.last_signed(), (SEED_ACCOUNT.into(), DEFAULT_FEE, 7));
    }

    #[tokio::test]
    async fn unknown_account_sequence_is_an_error() {
        let mut client = StubClient::new();
        client.sequence = None;
        let helper = helper(client);

        let err = helper
            .send_transaction(&pay_tx(), SendOptions::new(SEED_ACCOUNT))
            .await
            .unwrap_err();
        assert!(matches!(err, HelperError::SequenceUnavailable(_)));
        assert_eq!(helper.client.broadcast_count(), 0);
    }

    #[tokio::test]
    async fn missing_key_is_propagated_unmodified() {
        let helper = helper(StubClient::new());
        let err = helper
            .send_transaction(&pay_tx(), SendOptions::new("tccqstranger").with_seq(0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HelperError::KeyStore(KeyStoreError::KeyNotFound(_))
        ));
    }

    #[tokio::test]
    async fn asset_send_without_await_broadcasts_once_and_returns_no_results() {
        let helper = helper(StubClient::new());
        let mint = Transaction::MintAsset(MintAsset {
            scheme: AssetScheme {
                shard_id: 0,
                metadata: String::new(),
                supply: 10,
            },
            recipient: AssetAddress::from(DERIVED_ADDRESS),
        });

        let submission = helper
            .send_asset_transaction(
                &mint,
                AssetSendOptions::default().with_await_result(false),
            )
            .await
            .unwrap();

        assert!(submission.results.is_none());
        assert_eq!(helper.client.broadcast_count(), 1);
    }

    #[tokio::test]
    async fn asset_send_awaits_settlement_flags() {
        let mut client = StubClient::new();
        client.settlement = Settlement::Settled(vec![true, false]);
        let helper = helper(client);

        let submission = helper
            .send_asset_transaction(
                &Transaction::TransferAsset(transfer_tx(1)),
                AssetSendOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(submission.results, Some(vec![true, false]));
    }

    #[tokio::test]
    async fn asset_send_rejects_non_asset_transaction() {
        let helper = helper(StubClient::new());
        let err = helper
            .send_asset_transaction(&pay_tx(), AssetSendOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HelperError::NotAssetTransaction));
        assert_eq!(helper.client.broadcast_count(), 0);
    }

    #[tokio::test]
    async fn explicit_secret_bypasses_key_store() {
        let helper = helper(StubClient::new());
        helper
            .send_asset_transaction(
                &Transaction::TransferAsset(transfer_tx(1)),
                AssetSendOptions::default()
                    .with_secret(Secret::new("cd".repeat(32)))
                    .with_seq(1),
            )
            .await
            .unwrap();

        assert_eq!(helper.key_store.signed_count(), 0);
        assert_eq!(helper.client.raw_signs.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn default_signer_absence_fails_loudly() {
        let config = HelperConfig::new("http://localhost:8080", "tc").unwrap();
        let helper = Helper::new(config, StubClient::new(), StubKeyStore::new());

        let err = helper
            .send_asset_transaction(
                &Transaction::TransferAsset(transfer_tx(1)),
                AssetSendOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HelperError::NoDefaultSigner));
    }

    #[tokio::test]
    async fn asset_seq_falls_back_to_zero_for_fresh_seed_account() {
        let mut client = StubClient::new();
        client.sequence = None;
        let helper = helper(client);

        helper
            .send_asset_transaction(
                &Transaction::TransferAsset(transfer_tx(1)),
                AssetSendOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(helper.client.sequence_call_count(), 1);
        let (_, fee, seq) = helper.client.last_raw_sign();
        assert_eq!((fee, seq), (DEFAULT_FEE, 0));
    }

    #[tokio::test(start_paused = true)]
    async fn settlement_wait_times_out_instead_of_hanging() {
        let mut client = StubClient::new();
        client.settlement = Settlement::Pending;
        let helper = helper(client);

        let err = helper
            .send_asset_transaction(
                &Transaction::TransferAsset(transfer_tx(1)),
                AssetSendOptions::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, HelperError::ConfirmationTimedOut { .. }));
        // The transaction was still broadcast; only the wait expired.
        assert_eq!(helper.client.broadcast_count(), 1);
    }

    #[tokio::test]
    async fn settlement_rejection_is_not_a_timeout() {
        let mut client = StubClient::new();
        client.settlement = Settlement::Rejected("insufficient fee");
        let helper = helper(client);

        let err = helper
            .send_asset_transaction(
                &Transaction::TransferAsset(transfer_tx(1)),
                AssetSendOptions::default(),
            )
            .await
            .unwrap_err();

        match err {
            HelperError::Rejected { reason, .. } => assert_eq!(reason, "insufficient fee"),
            other => panic!("expected a rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn mint_asset_defaults_recipient_and_metadata() {
        let mut client = StubClient::new();
        client.asset = Some(Asset {
            tracker: Tracker([0; 32]),
            output_index: 9,
            shard_id: 9,
            supply: 100,
            address: AssetAddress::from(DERIVED_ADDRESS),
        });
        let helper = helper(client);

        let asset = helper.mint_asset(MintParams::new(100)).await.unwrap();

        assert_eq!(asset.supply, 100);
        assert_eq!(asset.address, AssetAddress::from(DERIVED_ADDRESS));
        assert_eq!(asset.output_index, 0);
        assert_eq!(asset.shard_id, MINT_SHARD);

        // The composed mint carries shard 0, empty metadata, and the
        // freshly derived recipient.
        let (tx, _, _) = helper.client.last_raw_sign();
        match tx {
            Transaction::MintAsset(mint) => {
                assert_eq!(mint.scheme.shard_id, MINT_SHARD);
                assert_eq!(mint.scheme.metadata, "");
                assert_eq!(mint.scheme.supply, 100);
                assert_eq!(mint.recipient, AssetAddress::from(DERIVED_ADDRESS));
            }
            other => panic!("expected a mint, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn mint_asset_metadata_reaches_the_scheme() {
        let mut client = StubClient::new();
        client.asset = Some(Asset {
            tracker: Tracker([0; 32]),
            output_index: 0,
            shard_id: 0,
            supply: 1,
            address: AssetAddress::from(DERIVED_ADDRESS),
        });
        let helper = helper(client);

        let metadata = serde_json::json!({ "name": "Gold" }).to_string();
        helper
            .mint_asset(MintParams::new(1).with_metadata(metadata.clone()))
            .await
            .unwrap();

        let (tx, _, _) = helper.client.last_raw_sign();
        match tx {
            Transaction::MintAsset(mint) => assert_eq!(mint.scheme.metadata, metadata),
            other => panic!("expected a mint, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn mint_asset_lookup_miss_is_mint_failed() {
        let helper = helper(StubClient::new());
        let err = helper.mint_asset(MintParams::new(100)).await.unwrap_err();
        assert!(matches!(err, HelperError::MintFailed { .. }));
    }

    #[tokio::test]
    async fn input_signing_touches_only_the_target_slot() {
        let helper = helper(StubClient::new());
        let mut transfer = transfer_tx(3);
        let before = transfer.clone();

        helper.sign_transaction_input(&mut transfer, 1).await.unwrap();

        assert!(transfer.inputs[0].signature.is_none());
        assert!(transfer.inputs[1].signature.is_some());
        assert!(transfer.inputs[2].signature.is_none());
        assert_eq!(transfer.inputs[0].prev_out, before.inputs[0].prev_out);
        assert_eq!(transfer.inputs[2].prev_out, before.inputs[2].prev_out);
        assert_eq!(transfer.outputs, before.outputs);
    }

    #[tokio::test]
    async fn input_signing_out_of_range_errors() {
        let helper = helper(StubClient::new());
        let mut transfer = transfer_tx(1);

        let err = helper
            .sign_transaction_input(&mut transfer, 5)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HelperError::KeyStore(KeyStoreError::InputOutOfRange { index: 5, inputs: 1 })
        ));
    }
}
