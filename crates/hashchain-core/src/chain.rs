//! Chain: an ordered sequence of blocks from genesis to tip.
//!
//! A `Chain` is a plain value. Nothing here enforces linkage; use
//! [`Chain::validate`] or [`validate_chain`](crate::validation::validate_chain)
//! before trusting one that came from outside.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::ValidationError;
use crate::validation::validate_chain;

/// An ordered sequence of blocks. Index 0 is genesis.
///
/// Serializes as a JSON array of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// A chain holding only `genesis`.
    pub fn new(genesis: Block) -> Self {
        Self {
            blocks: vec![genesis],
        }
    }

    /// Wrap an existing block sequence without checking it.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The first block.
    pub fn genesis(&self) -> Option<&Block> {
        self.blocks.first()
    }

    /// The last block.
    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// A new chain equal to this one with `block` appended.
    pub fn extended(&self, block: Block) -> Chain {
        let mut blocks = Vec::with_capacity(self.blocks.len() + 1);
        blocks.extend_from_slice(&self.blocks);
        blocks.push(block);
        Chain { blocks }
    }

    /// Append in place. Only for chains that are not yet shared.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Validate genesis identity and every link.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_chain(&self.blocks)
    }
}
