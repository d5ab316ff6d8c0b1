//! ChainStore trait: the abstract interface for owning the authoritative chain.

use std::sync::Arc;

use hashchain_core::{Block, Chain, ValidationError};

/// Why a candidate chain was discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Candidate is valid but not strictly longer than the current chain.
    NotLonger { candidate: usize, current: usize },
    /// Candidate failed full-chain validation.
    Invalid(ValidationError),
}

/// Outcome of [`ChainStore::propose_replacement`].
///
/// Rejection is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Replacement {
    /// The candidate is now the authoritative chain.
    Accepted { previous_len: usize, new_len: usize },
    /// The candidate was discarded; the store is unchanged.
    Rejected(RejectReason),
}

impl Replacement {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Replacement::Accepted { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Replacement::Rejected(_))
    }

    /// The rejection reason, if rejected.
    pub fn reject_reason(&self) -> Option<&RejectReason> {
        match self {
            Replacement::Rejected(reason) => Some(reason),
            Replacement::Accepted { .. } => None,
        }
    }
}

/// The ChainStore trait: owner of a single authoritative chain.
///
/// # Design Notes
///
/// - The chain always holds at least its genesis block.
/// - `snapshot` and `tip` never observe a partially replaced chain.
/// - `propose_replacement` validates the whole candidate and then makes one
///   atomic accept-or-discard decision. No retries.
pub trait ChainStore: Send + Sync {
    /// A consistent, immutable view of the current chain.
    fn snapshot(&self) -> Arc<Chain>;

    /// The last block of the current chain.
    fn tip(&self) -> Block;

    /// The genesis block this store was created with. Fixed for its lifetime.
    fn genesis(&self) -> &Block;

    /// Offer a candidate chain.
    ///
    /// Accepted only if the candidate is fully valid, starts from this store's
    /// genesis, and is strictly longer than the current chain.
    fn propose_replacement(&self, candidate: Chain) -> Replacement;

    /// Length of the current chain.
    fn len(&self) -> usize {
        self.snapshot().len()
    }
}
