use thiserror::Error;

/// Why a candidate block was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidBlockReason {
    /// `previous_hash` does not name the predecessor's hash.
    PreviousHashMismatch,
    /// The stored hash differs from the recomputed one.
    HashMismatch,
    /// The index does not follow the predecessor's index.
    IndexMismatch,
    /// The first block is not shaped like a genesis block.
    GenesisMismatch,
    /// The last block's index leaves no room for a successor.
    IndexOverflow,
}

impl std::fmt::Display for InvalidBlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            InvalidBlockReason::PreviousHashMismatch => "previous hash mismatch",
            InvalidBlockReason::HashMismatch => "hash mismatch",
            InvalidBlockReason::IndexMismatch => "index mismatch",
            InvalidBlockReason::GenesisMismatch => "malformed genesis block",
            InvalidBlockReason::IndexOverflow => "index overflow",
        };
        f.write_str(msg)
    }
}

/// Failure reported by a [`DigestProvider`](crate::digest::DigestProvider).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    #[error("digest algorithm `{0}` is not available")]
    Unavailable(String),
    #[error("digest failed: {0}")]
    Failed(String),
}

/// Every failure a chain operation can return.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain has no blocks")]
    EmptyChain,
    #[error("chain already has a genesis block")]
    GenesisAlreadyExists,
    #[error("previous block is not part of the chain")]
    BlockNotFound,
    #[error("invalid block: {0}")]
    InvalidBlock(InvalidBlockReason),
    #[error("digest algorithm `{0}` is not available")]
    DigestUnavailable(String),
    #[error("failed to compute block hash: {0}")]
    HashComputationFailed(String),
    #[error("unknown chain error: {0}")]
    Unknown(String),
}

impl From<DigestError> for ChainError {
    fn from(e: DigestError) -> Self {
        match e {
            DigestError::Unavailable(method) => ChainError::DigestUnavailable(method),
            DigestError::Failed(msg) => ChainError::HashComputationFailed(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChainError>;
