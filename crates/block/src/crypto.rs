use sha2::{Digest, Sha256};

use crate::types::Transaction;

/// SHA-256 hash of arbitrary bytes.
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Combined digest over a block's transaction identifiers.
///
/// Identifiers are fed to a single SHA-256 pass in block order with no
/// separator, so the digest is order-sensitive. An empty sequence digests
/// the empty byte string.
pub fn transactions_digest<T: Transaction>(transactions: &[T]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for tx in transactions {
        hasher.update(tx.id());
    }
    hasher.finalize().into()
}

/// Builds the message the proof-of-work search hashes for a candidate nonce:
/// `prev || transactions_digest || timestamp || version || nonce`
/// (integers little-endian).
///
/// A pure function of its inputs: identical field values always produce
/// identical bytes, so re-mining a block at the same nonce reproduces the
/// same candidate hash.
#[must_use]
pub fn work_message(
    prev: &[u8],
    transactions_digest: &[u8; 32],
    timestamp: u64,
    version: u32,
    nonce: u64,
) -> Vec<u8> {
    let mut msg = Vec::with_capacity(prev.len() + 32 + 8 + 4 + 8);
    msg.extend_from_slice(prev);
    msg.extend_from_slice(transactions_digest);
    msg.extend_from_slice(&timestamp.to_le_bytes());
    msg.extend_from_slice(&version.to_le_bytes());
    msg.extend_from_slice(&nonce.to_le_bytes());
    msg
}
