//! Error types for Hashchain Core.

use thiserror::Error;

/// Validation errors for block linkage and fingerprints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid index: expected {expected}, got {got}")]
    IndexMismatch { expected: u64, got: u64 },

    #[error("predecessor index {} has no successor", u64::MAX)]
    IndexOverflow,

    #[error("prev_hash does not match predecessor: expected {expected}, got {got}")]
    PrevHashMismatch { expected: String, got: String },

    #[error("stored hash does not match fingerprint: expected {expected}, got {got}")]
    HashMismatch { expected: String, got: String },

    #[error("genesis block must have index 0, got {0}")]
    NotGenesis(u64),

    #[error("genesis block must have an empty prev_hash")]
    GenesisHasPrevHash,

    #[error("chain starts from a different genesis block")]
    GenesisMismatch,

    #[error("chain is empty")]
    EmptyChain,

    #[error("block at position {position}: {source}")]
    AtPosition {
        position: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Wrap this error with the chain position of the offending block.
    pub fn at(self, position: usize) -> Self {
        ValidationError::AtPosition {
            position,
            source: Box::new(self),
        }
    }

    /// The innermost error, with any position wrapping removed.
    pub fn root(&self) -> &ValidationError {
        match self {
            ValidationError::AtPosition { source, .. } => source.root(),
            other => other,
        }
    }
}
