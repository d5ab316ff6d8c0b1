//! The Node: the operations exposed to the request layer.
//!
//! A node wraps a [`ChainStore`] and turns an append request into
//! snapshot → extend → validate → propose.

use std::sync::Arc;

use hashchain_core::{extend, validate_link, Block, Chain};
use hashchain_store::{ChainStore, MemoryChainStore, RejectReason, Replacement};
use tracing::debug;

use crate::error::{NodeError, Result};

/// Configuration for the Node.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Payload stored in the genesis block of a freshly created chain.
    pub genesis_payload: i64,
}

/// Result of an append request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The new block is now the tip of the authoritative chain.
    Accepted(Block),
    /// Another append published first; the block was built but discarded.
    Superseded { block: Block, reason: RejectReason },
}

impl AppendOutcome {
    /// The block that was built, accepted or not.
    pub fn block(&self) -> &Block {
        match self {
            AppendOutcome::Accepted(block) => block,
            AppendOutcome::Superseded { block, .. } => block,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, AppendOutcome::Accepted(_))
    }
}

/// The main Node struct.
///
/// Cheap to clone; clones share the same store.
pub struct Node<S: ChainStore> {
    /// The chain owner.
    store: Arc<S>,
}

impl Node<MemoryChainStore> {
    /// Create a node over a fresh in-memory chain with a genesis block stamped now.
    pub fn in_memory(config: NodeConfig) -> Self {
        Self::new(MemoryChainStore::with_genesis_payload(config.genesis_payload))
    }

    /// Create a node over an in-memory chain rooted at `genesis`.
    pub fn with_genesis(genesis: Block) -> Result<Self> {
        Ok(Self::new(MemoryChainStore::new(genesis)?))
    }
}

impl<S: ChainStore> Node<S> {
    /// Create a new node.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// The current authoritative chain.
    pub fn get_chain(&self) -> Arc<Chain> {
        self.store.snapshot()
    }

    /// The last block of the current chain.
    pub fn tip(&self) -> Block {
        self.store.tip()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a block carrying `payload`.
    ///
    /// The block extends the tip of one snapshot, and the candidate chain is
    /// that same snapshot plus the block. If another append replaces the chain
    /// in between, the candidate is no longer strictly longer and the outcome
    /// is [`AppendOutcome::Superseded`].
    pub fn append(&self, payload: i64) -> Result<AppendOutcome> {
        let snapshot = self.store.snapshot();
        let tip = snapshot.tip().unwrap_or_else(|| self.store.genesis());

        let block = extend(tip, payload);
        validate_link(&block, tip).map_err(NodeError::ValidationFailed)?;

        match self.store.propose_replacement(snapshot.extended(block.clone())) {
            Replacement::Accepted { new_len, .. } => {
                debug!(index = block.index, hash = %block.hash, len = new_len, "block appended");
                Ok(AppendOutcome::Accepted(block))
            }
            Replacement::Rejected(reason) => {
                debug!(index = block.index, ?reason, "append superseded by a concurrent write");
                Ok(AppendOutcome::Superseded { block, reason })
            }
        }
    }

    /// Offer a whole chain from elsewhere. Same rules as any replacement.
    pub fn propose_chain(&self, candidate: Chain) -> Replacement {
        self.store.propose_replacement(candidate)
    }
}

impl<S: ChainStore> Clone for Node<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashchain_core::{is_valid, BlockBuilder, ValidationError};

    /// A store whose tip is at the last representable index.
    struct ExhaustedStore {
        genesis: Block,
        chain: Arc<Chain>,
    }

    impl ExhaustedStore {
        fn new() -> Self {
            let genesis = BlockBuilder::new(0).timestamp("t0").build();
            let tip = BlockBuilder::new(u64::MAX)
                .timestamp("t1")
                .prev_hash(genesis.hash.clone())
                .build();
            let chain = Arc::new(Chain::from_blocks(vec![genesis.clone(), tip]));
            Self { genesis, chain }
        }
    }

    impl ChainStore for ExhaustedStore {
        fn snapshot(&self) -> Arc<Chain> {
            Arc::clone(&self.chain)
        }

        fn tip(&self) -> Block {
            self.chain.tip().cloned().unwrap_or_else(|| self.genesis.clone())
        }

        fn genesis(&self) -> &Block {
            &self.genesis
        }

        fn propose_replacement(&self, _candidate: Chain) -> Replacement {
            panic!("an invalid block must not be proposed");
        }
    }

    #[test]
    fn test_append_on_fresh_node() {
        let node = Node::in_memory(NodeConfig::default());
        let genesis = node.tip();

        let outcome = node.append(42).unwrap();
        let block = match outcome {
            AppendOutcome::Accepted(block) => block,
            other => panic!("expected acceptance, got {other:?}"),
        };

        assert_eq!(block.index, 1);
        assert_eq!(block.prev_hash, genesis.hash);
        assert_eq!(block.payload, 42);
        assert!(is_valid(&block, &genesis));
        assert_eq!(node.tip(), block);
    }

    #[test]
    fn test_genesis_payload_from_config() {
        let node = Node::in_memory(NodeConfig { genesis_payload: 7 });
        assert_eq!(node.get_chain().genesis().unwrap().payload, 7);
    }

    #[test]
    fn test_with_genesis_rejects_invalid_root() {
        let bad = BlockBuilder::new(3).timestamp("t").build();
        assert!(matches!(
            Node::with_genesis(bad),
            Err(NodeError::Store(_))
        ));
    }

    #[test]
    fn test_append_past_last_index_fails_validation() {
        let node = Node::new(ExhaustedStore::new());

        match node.append(1) {
            Err(NodeError::ValidationFailed(e)) => assert_eq!(e, ValidationError::IndexOverflow),
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
        assert_eq!(node.get_chain().len(), 2);
    }

    #[test]
    fn test_sequential_appends() {
        let node = Node::in_memory(NodeConfig::default());
        for i in 0..10 {
            assert!(node.append(i).unwrap().is_accepted());
        }
        let chain = node.get_chain();
        assert_eq!(chain.len(), 11);
        assert!(chain.validate().is_ok());
        let payloads: Vec<i64> = chain.iter().skip(1).map(|b| b.payload).collect();
        assert_eq!(payloads, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_clones_share_store() {
        let node = Node::in_memory(NodeConfig::default());
        let other = node.clone();
        other.append(1).unwrap();
        assert_eq!(node.get_chain().len(), 2);
    }
}
