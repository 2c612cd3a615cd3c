use crate::pow::ProofOfWork;
use crate::types::{Block, Transaction};

/// Create the first block of a chain from its coinbase transaction.
///
/// The genesis block carries exactly one transaction and is the only block
/// with an empty parent hash. Both construction preconditions hold by the
/// signature, so this cannot fail.
pub fn create_genesis<T: Transaction>(coinbase: T, pow: &ProofOfWork) -> Block<T> {
    Block::mined(vec![coinbase], Vec::new(), pow)
}
