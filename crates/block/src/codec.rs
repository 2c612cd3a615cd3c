use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DecodeError, EncodeError};
use crate::types::Block;

impl<T: Serialize> Block<T> {
    /// Encode this block for persistence.
    ///
    /// Lossless for every legally constructed block; an error here means an
    /// in-memory invariant was already broken.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| EncodeError(e.to_string()))
    }
}

impl<T: DeserializeOwned> Block<T> {
    /// Decode a persisted block record.
    ///
    /// Rejects truncated, malformed, and over-long input without returning a
    /// partially populated block. The stored `hash` and `nonce` are trusted
    /// as given; re-validating proof-of-work is the caller's job
    /// (`ProofOfWork::verify`).
    pub fn decode(blob: &[u8]) -> Result<Self, DecodeError> {
        let (block, consumed) =
            bincode::serde::decode_from_slice(blob, bincode::config::standard())
                .map_err(|e| DecodeError::Malformed(e.to_string()))?;

        if consumed != blob.len() {
            return Err(DecodeError::TrailingBytes {
                remaining: blob.len() - consumed,
            });
        }

        Ok(block)
    }
}
