//! # Ledger Service
//!
//! The lock-guarded owner of the block sequence.
//!
//! ## Concurrency
//!
//! `append` takes the write lock for the whole "check height, seal, push"
//! section, then downgrades it to a read lock for the post-append
//! validation pass. No other writer can slip in between the push and the
//! validation, and readers only ever see fully sealed blocks.

use crate::adapters::time::SystemTimeSource;
use crate::domain::entities::{genesis_body, Block, Hash, StarRecord};
use crate::domain::errors::{AppendError, LedgerError};
use crate::domain::validator::{validate_chain, ValidationFinding};
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::TimeSource;
use parking_lot::{RwLock, RwLockWriteGuard};
use tracing::{debug, error, info};

/// Block sequence plus its cached height.
#[derive(Debug)]
struct ChainState {
    blocks: Vec<Block>,
    current_height: i64,
}

impl ChainState {
    fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            current_height: -1,
        }
    }
}

/// The ledger.
///
/// Construction seals the genesis block, so every `Ledger` value is
/// initialized before any other operation can observe it.
pub struct Ledger<TS: TimeSource = SystemTimeSource> {
    state: RwLock<ChainState>,
    time_source: TS,
}

impl Ledger<SystemTimeSource> {
    /// Create a ledger stamped by the system clock.
    pub fn new() -> Self {
        Self::with_time_source(SystemTimeSource)
    }
}

impl Default for Ledger<SystemTimeSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TS: TimeSource> Ledger<TS> {
    /// Create a ledger with an injected clock.
    pub fn with_time_source(time_source: TS) -> Self {
        let ledger = Self {
            state: RwLock::new(ChainState::empty()),
            time_source,
        };
        ledger.initialize();
        ledger
    }

    /// Snapshot of every block, in chain order.
    pub fn blocks(&self) -> Vec<Block> {
        self.state.read().blocks.clone()
    }

    /// Steps 1-4 of an append: height check, seal, push. Caller holds the
    /// write lock.
    fn seal_and_push(&self, state: &mut ChainState, body: String) -> Result<Block, AppendError> {
        let target = state.current_height + 1;
        let actual_len = state.blocks.len() as u64;
        if actual_len != target as u64 {
            return Err(AppendError::HeightMismatch {
                expected_len: target as u64,
                actual_len,
            });
        }

        let previous_block_hash = state.blocks.last().map(|prev| prev.hash);
        let block = Block::seal(
            target as u64,
            previous_block_hash,
            self.time_source.now(),
            body,
        );

        state.blocks.push(block.clone());
        state.current_height = target;
        Ok(block)
    }

    /// Apply `mutate` to the sealed block at `height`, bypassing every
    /// invariant. Returns `false` if no such block exists.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn corrupt_block(&self, height: u64, mutate: impl FnOnce(&mut Block)) -> bool {
        let mut state = self.state.write();
        match state.blocks.get_mut(height as usize) {
            Some(block) => {
                mutate(block);
                true
            }
            None => false,
        }
    }
}

impl<TS: TimeSource> LedgerApi for Ledger<TS> {
    fn current_height(&self) -> i64 {
        self.state.read().current_height
    }

    fn initialize(&self) {
        let mut state = self.state.write();
        if !state.blocks.is_empty() {
            return;
        }

        match self.seal_and_push(&mut state, genesis_body()) {
            Ok(genesis) => info!(hash = %genesis.hash_hex(), "Genesis block sealed"),
            Err(e) => error!(error = %e, "Failed to seal genesis block"),
        }
    }

    fn append(&self, body: String) -> Result<Block, AppendError> {
        let mut state = self.state.write();
        let block = self.seal_and_push(&mut state, body).inspect_err(|e| {
            error!(error = %e, "Append rejected");
        })?;

        let state = RwLockWriteGuard::downgrade(state);
        let findings = validate_chain(&state.blocks);
        drop(state);

        if !findings.is_empty() {
            error!(
                height = block.height,
                findings = findings.len(),
                "Chain failed validation after append"
            );
            return Err(AppendError::ValidationFailed(findings));
        }

        info!(height = block.height, hash = %block.hash_hex(), "Block appended");
        Ok(block)
    }

    fn block_by_hash(&self, hash: &Hash) -> Result<Block, LedgerError> {
        self.state
            .read()
            .blocks
            .iter()
            .find(|block| &block.hash == hash)
            .cloned()
            .ok_or(LedgerError::BlockNotFound { hash: *hash })
    }

    fn block_by_height(&self, height: u64) -> Result<Block, LedgerError> {
        self.state
            .read()
            .blocks
            .get(height as usize)
            .cloned()
            .ok_or(LedgerError::HeightNotFound { height })
    }

    fn records_by_owner(&self, address: &str) -> Vec<StarRecord> {
        let state = self.state.read();
        state
            .blocks
            .iter()
            .filter(|block| !block.is_genesis())
            .filter_map(|block| match StarRecord::decode(&block.body) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!(height = block.height, error = %e, "Skipping undecodable body");
                    None
                }
            })
            .filter(|record| record.owner == address)
            .collect()
    }

    fn validate(&self) -> Vec<ValidationFinding> {
        validate_chain(&self.state.read().blocks)
    }
}
