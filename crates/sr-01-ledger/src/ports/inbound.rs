//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the ledger. Implementations must be thread-safe and
//! must publish each appended block atomically.

use crate::domain::entities::{Block, Hash, StarRecord};
use crate::domain::errors::{AppendError, LedgerError};
use crate::domain::validator::ValidationFinding;

/// Primary API for the ledger.
pub trait LedgerApi: Send + Sync {
    /// Height of the last sealed block, `-1` if the chain is empty.
    fn current_height(&self) -> i64;

    /// Seal the genesis block if the chain is empty. Idempotent.
    fn initialize(&self);

    /// Seal and append a block carrying an already-encoded body.
    ///
    /// ## Errors
    ///
    /// - `HeightMismatch`: chain length disagreed with the cached height
    /// - `ValidationFailed`: the block was committed but the chain no
    ///   longer validates; there is no rollback
    fn append(&self, body: String) -> Result<Block, AppendError>;

    /// Encode a star record and append it.
    fn append_record(&self, record: &StarRecord) -> Result<Block, AppendError> {
        self.append(record.encode())
    }

    /// Look up a block by hash.
    fn block_by_hash(&self, hash: &Hash) -> Result<Block, LedgerError>;

    /// Look up a block by height.
    fn block_by_height(&self, height: u64) -> Result<Block, LedgerError>;

    /// Decoded records owned by `address`, in chain order.
    ///
    /// Bodies that fail to decode are skipped.
    fn records_by_owner(&self, address: &str) -> Vec<StarRecord>;

    /// Run the chain validator over the current snapshot.
    fn validate(&self) -> Vec<ValidationFinding>;
}
