use std::fmt;

/// Rejected inputs to block construction.
#[derive(Debug, PartialEq, Eq)]
pub enum ConstructionError {
    /// Every block, genesis included, carries at least one transaction.
    EmptyTransactions,
    /// Only the genesis block may have an empty parent hash.
    MissingParentHash,
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTransactions => write!(f, "block has no transactions"),
            Self::MissingParentHash => {
                write!(f, "non-genesis block has an empty parent hash")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// A persisted block record that could not be decoded.
#[derive(Debug)]
pub enum DecodeError {
    /// Truncated, corrupt, or structurally invalid record.
    Malformed(String),
    /// A well-formed record followed by leftover bytes.
    TrailingBytes { remaining: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "malformed block record: {msg}"),
            Self::TrailingBytes { remaining } => {
                write!(f, "block record has {remaining} trailing bytes")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Failed to encode a block for persistence.
///
/// Unreachable for any legally constructed block; callers treat it as an
/// invariant violation, not a recoverable failure.
#[derive(Debug)]
pub struct EncodeError(pub(crate) String);

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to encode block: {}", self.0)
    }
}

impl std::error::Error for EncodeError {}
