use serde::{Deserialize, Serialize};

use crate::crypto;
use crate::error::ConstructionError;
use crate::pow::ProofOfWork;

/// Block format version stamped into every block.
pub const BLOCK_VERSION: u32 = 1;

/// The capability a transaction exposes to the block layer.
///
/// Blocks never look inside a transaction; they only fold each
/// transaction's identifier into the mined digest.
pub trait Transaction {
    /// Identifier bytes, used as digest input in block order.
    fn id(&self) -> &[u8];
}

/// A block in the chain.
///
/// Born provisional (empty `hash`, zero `nonce`), finalized once the
/// proof-of-work search commits its winning `(nonce, hash)` pair, and never
/// mutated after that. The provisional state is not observable by callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block<T> {
    /// Hash of the previous block (empty only for genesis).
    pub prev: Vec<u8>,
    /// SHA-256 hash of this block, committed by proof-of-work.
    pub hash: Vec<u8>,
    /// Unix timestamp (seconds) of block creation.
    pub timestamp: u64,
    /// Transactions carried by this block.
    pub transactions: Vec<T>,
    /// Block format version.
    pub version: u32,
    /// Proof-of-work solution, meaningful only together with `hash`.
    pub nonce: u64,
}

impl<T: Transaction> Block<T> {
    /// Create and mine a block on top of the parent identified by `prev`.
    ///
    /// Blocking: the proof-of-work search runs to completion before this
    /// returns. Rejects an empty transaction batch and an empty parent hash
    /// (`create_genesis` is the only path to a block without a parent).
    pub fn new(
        transactions: Vec<T>,
        prev: Vec<u8>,
        pow: &ProofOfWork,
    ) -> Result<Self, ConstructionError> {
        if transactions.is_empty() {
            return Err(ConstructionError::EmptyTransactions);
        }
        if prev.is_empty() {
            return Err(ConstructionError::MissingParentHash);
        }
        Ok(Self::mined(transactions, prev, pow))
    }

    /// Build a provisional block and finalize it through the miner.
    pub(crate) fn mined(transactions: Vec<T>, prev: Vec<u8>, pow: &ProofOfWork) -> Self {
        let mut block = Self {
            prev,
            hash: Vec::new(),
            timestamp: current_timestamp(),
            transactions,
            version: BLOCK_VERSION,
            nonce: 0,
        };

        let (nonce, hash) = pow.run(&block);
        block.nonce = nonce;
        block.hash = hash.to_vec();
        block
    }

    /// Combined digest over this block's transaction identifiers.
    ///
    /// Never persisted; recomputed on demand when validating proof-of-work.
    #[must_use]
    pub fn transactions_digest(&self) -> [u8; 32] {
        crypto::transactions_digest(&self.transactions)
    }

    /// The bytes the proof-of-work search hashes for a candidate `nonce`.
    #[must_use]
    pub fn work_message(&self, nonce: u64) -> Vec<u8> {
        crypto::work_message(
            &self.prev,
            &self.transactions_digest(),
            self.timestamp,
            self.version,
            nonce,
        )
    }
}

fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_secs()
}
