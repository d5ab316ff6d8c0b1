//! In-memory implementation of the ChainStore trait.
//!
//! The chain lives behind a `RwLock<Arc<Chain>>`. Readers clone the `Arc`;
//! a replacement validates outside the lock and holds the write lock only to
//! compare lengths and swap.

use std::sync::{Arc, PoisonError, RwLock};

use hashchain_core::{genesis, validate_genesis, Block, Chain, ValidationError};
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};
use crate::traits::{ChainStore, RejectReason, Replacement};

/// In-memory chain store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryChainStore {
    genesis: Block,
    chain: RwLock<Arc<Chain>>,
}

impl MemoryChainStore {
    /// Create a store seeded with `genesis`.
    ///
    /// Fails if `genesis` is not a valid chain root.
    pub fn new(genesis: Block) -> Result<Self> {
        validate_genesis(&genesis).map_err(StoreError::InvalidGenesis)?;
        Ok(Self::seeded(genesis))
    }

    /// Create a store with a fresh genesis block stamped now.
    pub fn with_genesis_payload(payload: i64) -> Self {
        Self::seeded(genesis(payload))
    }

    fn seeded(genesis: Block) -> Self {
        info!(hash = %genesis.hash, timestamp = %genesis.timestamp, "chain initialized with genesis block");
        Self {
            chain: RwLock::new(Arc::new(Chain::new(genesis.clone()))),
            genesis,
        }
    }

    /// Full validation of a candidate, including that it shares our genesis.
    fn check_candidate(&self, candidate: &Chain) -> std::result::Result<(), ValidationError> {
        candidate.validate()?;
        match candidate.genesis() {
            Some(g) if *g == self.genesis => Ok(()),
            _ => Err(ValidationError::GenesisMismatch.at(0)),
        }
    }
}

impl ChainStore for MemoryChainStore {
    fn snapshot(&self) -> Arc<Chain> {
        let guard = self.chain.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    fn tip(&self) -> Block {
        self.snapshot()
            .tip()
            .cloned()
            .unwrap_or_else(|| self.genesis.clone())
    }

    fn genesis(&self) -> &Block {
        &self.genesis
    }

    fn propose_replacement(&self, candidate: Chain) -> Replacement {
        if let Err(e) = self.check_candidate(&candidate) {
            warn!(len = candidate.len(), error = %e, "rejected invalid candidate chain");
            return Replacement::Rejected(RejectReason::Invalid(e));
        }

        let candidate = Arc::new(candidate);
        let mut guard = self.chain.write().unwrap_or_else(PoisonError::into_inner);

        let current = guard.len();
        if candidate.len() <= current {
            debug!(candidate = candidate.len(), current, "candidate chain not longer; discarded");
            return Replacement::Rejected(RejectReason::NotLonger {
                candidate: candidate.len(),
                current,
            });
        }

        let new_len = candidate.len();
        *guard = candidate;
        drop(guard);

        info!(previous_len = current, new_len, "chain replaced");
        Replacement::Accepted {
            previous_len: current,
            new_len,
        }
    }
}
