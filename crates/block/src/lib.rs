#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod codec;
mod crypto;
mod error;
mod genesis;
mod pow;
mod types;

pub use crypto::{hash_bytes, transactions_digest, work_message};
pub use error::{ConstructionError, DecodeError, EncodeError};
pub use genesis::create_genesis;
pub use pow::{DEFAULT_TARGET_BITS, ProofOfWork};
pub use types::{BLOCK_VERSION, Block, Transaction};
