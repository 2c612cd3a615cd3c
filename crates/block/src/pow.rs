use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crate::crypto;
use crate::types::{Block, Transaction};

/// Default difficulty: leading zero bits required of a winning hash.
pub const DEFAULT_TARGET_BITS: u32 = 16;

/// The proof-of-work collaborator.
///
/// Searches for a nonce whose candidate hash clears the difficulty target,
/// and re-checks finalized blocks against the same predicate.
#[derive(Clone, Debug)]
pub struct ProofOfWork {
    target_bits: u32,
    workers: usize,
}

impl ProofOfWork {
    /// A single-threaded search at the given difficulty.
    #[must_use]
    pub const fn new(target_bits: u32) -> Self {
        Self {
            target_bits,
            workers: 1,
        }
    }

    /// A search fanned out over `workers` threads on disjoint nonce strides.
    #[must_use]
    pub fn with_workers(target_bits: u32, workers: usize) -> Self {
        Self {
            target_bits,
            workers: workers.max(1),
        }
    }

    /// Whether `hash` clears the difficulty target.
    #[must_use]
    pub const fn matches(&self, hash: &[u8; 32]) -> bool {
        leading_zero_bits(hash) >= self.target_bits
    }

    /// Search for the smallest nonce whose candidate hash clears the target.
    ///
    /// Blocking and CPU-bound. Exactly one `(nonce, hash)` pair is returned,
    /// and the same pair for the same block regardless of worker count:
    /// workers scan disjoint strides in ascending order and the global
    /// minimum wins, so repeated runs over identical input agree.
    pub fn run<T: Transaction>(&self, block: &Block<T>) -> (u64, [u8; 32]) {
        let digest = block.transactions_digest();
        let prev = block.prev.as_slice();
        let (timestamp, version) = (block.timestamp, block.version);

        tracing::debug!(
            target_bits = self.target_bits,
            workers = self.workers,
            "mining block"
        );

        let best = AtomicU64::new(u64::MAX);
        let stride = self.workers as u64;

        thread::scope(|scope| {
            for lane in 0..stride {
                let best = &best;
                scope.spawn(move || {
                    let mut nonce = lane;
                    while nonce < best.load(Ordering::Acquire) {
                        let hash = crypto::hash_bytes(&crypto::work_message(
                            prev, &digest, timestamp, version, nonce,
                        ));
                        if self.matches(&hash) {
                            best.fetch_min(nonce, Ordering::AcqRel);
                            break;
                        }
                        let Some(next) = nonce.checked_add(stride) else {
                            break;
                        };
                        nonce = next;
                    }
                });
            }
        });

        let nonce = best.load(Ordering::Acquire);
        assert_ne!(nonce, u64::MAX, "nonce space exhausted");

        let hash = crypto::hash_bytes(&crypto::work_message(
            prev, &digest, timestamp, version, nonce,
        ));
        tracing::debug!(nonce, "block mined");
        (nonce, hash)
    }

    /// Re-check a finalized block: the candidate hash at the stored nonce
    /// must clear the target and equal the stored hash.
    #[must_use]
    pub fn verify<T: Transaction>(&self, block: &Block<T>) -> bool {
        let hash = crypto::hash_bytes(&block.work_message(block.nonce));
        self.matches(&hash) && block.hash.as_slice() == hash.as_slice()
    }
}

impl Default for ProofOfWork {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_BITS)
    }
}

const fn leading_zero_bits(hash: &[u8; 32]) -> u32 {
    let mut bits = 0;
    let mut i = 0;
    while i < hash.len() {
        if hash[i] != 0 {
            return bits + hash[i].leading_zeros();
        }
        bits += 8;
        i += 1;
    }
    bits
}
