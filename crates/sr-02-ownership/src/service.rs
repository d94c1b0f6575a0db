//! # Star Registry Service
//!
//! Application service implementing `StarRegistryApi`.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`StarRegistryApi`)
//! - Uses the outbound port (`MessageVerifier`) for signature checks
//! - Owns the ledger and is the only component that asks it to append
//!
//! Each submission ends in exactly one outcome: a sealed block or a
//! rejection. Rejections happen before the ledger is touched.

use crate::domain::challenge::Challenge;
use crate::domain::config::OwnershipConfig;
use crate::domain::ecdsa::Eip191Verifier;
use crate::domain::entities::RecordSubmission;
use crate::domain::errors::OwnershipError;
use crate::ports::inbound::StarRegistryApi;
use crate::ports::outbound::MessageVerifier;
use sr_01_ledger::{
    Block, Hash, Ledger, LedgerApi, LedgerError, StarRecord, SystemTimeSource, TimeSource,
    ValidationFinding,
};
use tracing::{debug, info, warn};

/// Star Registry Service.
pub struct StarRegistryService<L, V = Eip191Verifier, T = SystemTimeSource>
where
    L: LedgerApi,
    V: MessageVerifier,
    T: TimeSource,
{
    ledger: L,
    verifier: V,
    time_source: T,
    config: OwnershipConfig,
}

impl StarRegistryService<Ledger> {
    /// Production wiring: system clock, EIP-191 signatures, fresh ledger.
    pub fn with_config(config: OwnershipConfig) -> Self {
        Self::new(Ledger::new(), Eip191Verifier, SystemTimeSource, config)
    }
}

impl<L, V, T> StarRegistryService<L, V, T>
where
    L: LedgerApi,
    V: MessageVerifier,
    T: TimeSource,
{
    /// Create a new registry service.
    ///
    /// # Arguments
    /// * `ledger` - The ledger new records are appended to
    /// * `verifier` - Signature scheme used to prove address ownership
    /// * `time_source` - Clock used to issue and age challenges
    /// * `config` - Timelock settings
    pub fn new(ledger: L, verifier: V, time_source: T, config: OwnershipConfig) -> Self {
        Self {
            ledger,
            verifier,
            time_source,
            config,
        }
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn config(&self) -> &OwnershipConfig {
        &self.config
    }

    /// Steps 1-3 of a submission: parse, timelock, signature.
    fn authorize(&self, submission: &RecordSubmission) -> Result<(), OwnershipError> {
        let challenge = Challenge::parse(&submission.challenge)?;
        challenge.check_fresh(self.time_source.now(), &self.config)?;

        self.verifier
            .verify(
                &submission.address,
                &submission.challenge,
                &submission.signature,
            )
            .map_err(|e| {
                debug!(address = %submission.address, reason = %e, "Signature check failed");
                OwnershipError::InvalidSignature(e)
            })
    }
}

impl<L, V, T> StarRegistryApi for StarRegistryService<L, V, T>
where
    L: LedgerApi,
    V: MessageVerifier,
    T: TimeSource,
{
    fn chain_height(&self) -> i64 {
        self.ledger.current_height()
    }

    fn request_challenge(&self, address: &str) -> String {
        let challenge = Challenge::new(address, self.time_source.now()).to_string();
        info!(%address, %challenge, "Challenge issued");
        challenge
    }

    fn submit_record(&self, submission: RecordSubmission) -> Result<Block, OwnershipError> {
        if let Err(e) = self.authorize(&submission) {
            warn!(address = %submission.address, error = %e, "Submission rejected");
            return Err(e);
        }

        let owner = self.verifier.canonical_address(&submission.address);
        let record = StarRecord::new(owner, submission.star);
        let block = self.ledger.append_record(&record)?;
        info!(owner = %record.owner, height = block.height, "Star registered");
        Ok(block)
    }

    fn block_by_hash(&self, hash: &Hash) -> Result<Block, LedgerError> {
        self.ledger.block_by_hash(hash)
    }

    fn block_by_height(&self, height: u64) -> Result<Block, LedgerError> {
        self.ledger.block_by_height(height)
    }

    fn records_by_owner(&self, address: &str) -> Vec<StarRecord> {
        self.ledger
            .records_by_owner(&self.verifier.canonical_address(address))
    }

    fn validate_chain(&self) -> Vec<ValidationFinding> {
        self.ledger.validate()
    }
}
