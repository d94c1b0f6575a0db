//! # Inbound Ports (Driving Ports / API)
//!
//! The operations the registry exposes to its caller (e.g. the HTTP
//! gateway). Every method is synchronous and CPU-bound.

use crate::domain::entities::RecordSubmission;
use crate::domain::errors::OwnershipError;
use sr_01_ledger::{Block, Hash, LedgerError, StarRecord, ValidationFinding};

/// Primary Star Registry API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait StarRegistryApi: Send + Sync {
    /// Height of the last sealed block.
    fn chain_height(&self) -> i64;

    /// Issue a challenge for `address` to sign.
    fn request_challenge(&self, address: &str) -> String;

    /// Verify the submission and, on success, append its star record.
    ///
    /// # Errors
    /// * `MalformedChallenge` - challenge string could not be parsed
    /// * `ExpiredChallenge` - challenge is older than the timelock window
    /// * `ChallengeFromFuture` - challenge issue time leads the registry clock
    /// * `InvalidSignature` - signature does not prove ownership of the address
    /// * `Append` - the ledger refused or failed to validate the new block
    fn submit_record(&self, submission: RecordSubmission) -> Result<Block, OwnershipError>;

    /// Look up a block by hash.
    fn block_by_hash(&self, hash: &Hash) -> Result<Block, LedgerError>;

    /// Look up a block by height.
    fn block_by_height(&self, height: u64) -> Result<Block, LedgerError>;

    /// Star records registered by `address`, in chain order.
    fn records_by_owner(&self, address: &str) -> Vec<StarRecord>;

    /// Chain integrity findings; empty means valid.
    fn validate_chain(&self) -> Vec<ValidationFinding>;
}
