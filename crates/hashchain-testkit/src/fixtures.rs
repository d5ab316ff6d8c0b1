//! Test fixtures and helpers.
//!
//! Common setup code for integration tests. Every block built here has a
//! fixed timestamp, so hashes are reproducible across runs.

use hashchain_core::{Block, BlockBuilder, Chain};
use hashchain_store::MemoryChainStore;

/// Timestamp of every fixture genesis block.
pub const GENESIS_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// A test fixture with a fixed genesis block.
#[derive(Debug, Clone)]
pub struct ChainFixture {
    pub genesis: Block,
}

impl ChainFixture {
    /// Fixture with a zero-payload genesis.
    pub fn new() -> Self {
        Self::with_genesis_payload(0)
    }

    /// Fixture whose genesis carries `payload`.
    pub fn with_genesis_payload(payload: i64) -> Self {
        Self {
            genesis: BlockBuilder::new(0)
                .timestamp(GENESIS_TIMESTAMP)
                .payload(payload)
                .build(),
        }
    }

    /// A store seeded with this fixture's genesis.
    pub fn store(&self) -> MemoryChainStore {
        MemoryChainStore::new(self.genesis.clone()).expect("fixture genesis is valid")
    }

    /// Genesis followed by one block per payload.
    pub fn chain(&self, payloads: &[i64]) -> Chain {
        self.extend_chain(&Chain::new(self.genesis.clone()), payloads)
    }

    /// `base` followed by one block per payload.
    pub fn extend_chain(&self, base: &Chain, payloads: &[i64]) -> Chain {
        let mut chain = base.clone();
        for &payload in payloads {
            let next = self.next_block(chain.tip().unwrap_or(&self.genesis), payload);
            chain.push(next);
        }
        chain
    }

    /// Successor of `prev` with a timestamp derived from its index.
    pub fn next_block(&self, prev: &Block, payload: i64) -> Block {
        let index = prev.index.saturating_add(1);
        BlockBuilder::after(prev)
            .timestamp(fixture_timestamp(index))
            .payload(payload)
            .build()
    }
}

impl Default for ChainFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn fixture_timestamp(index: u64) -> String {
    format!(
        "2024-01-01T{:02}:{:02}:{:02}Z",
        (index / 3600) % 24,
        (index / 60) % 60,
        index % 60
    )
}

/// A hashed block field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Index,
    Timestamp,
    Payload,
    PrevHash,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Index, Field::Timestamp, Field::Payload, Field::PrevHash];
}

/// Copy of `block` with `field` altered and the stored hash left as it was.
pub fn tamper(block: &Block, field: Field) -> Block {
    let mut tampered = block.clone();
    match field {
        Field::Index => tampered.index = tampered.index.wrapping_add(1),
        Field::Timestamp => tampered.timestamp.push_str("+tampered"),
        Field::Payload => tampered.payload = tampered.payload.wrapping_add(1),
        Field::PrevHash => tampered.prev_hash = format!("{}00", tampered.prev_hash),
    }
    tampered
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashchain_core::validate_genesis;

    #[test]
    fn test_fixture_chain_is_valid() {
        let fixture = ChainFixture::new();
        let chain = fixture.chain(&[1, 2, 3, 4]);

        assert_eq!(chain.len(), 5);
        assert!(chain.validate().is_ok());
        assert_eq!(chain.genesis(), Some(&fixture.genesis));
    }

    #[test]
    fn test_fixture_is_reproducible() {
        let a = ChainFixture::new().chain(&[5, 6]);
        let b = ChainFixture::new().chain(&[5, 6]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_genesis_is_valid() {
        assert!(validate_genesis(&ChainFixture::with_genesis_payload(-3).genesis).is_ok());
    }

    #[test]
    fn test_tamper_changes_field_not_hash() {
        let chain = ChainFixture::new().chain(&[1]);
        let block = chain.tip().unwrap();

        for field in Field::ALL {
            let t = tamper(block, field);
            assert_ne!(&t, block);
            assert_eq!(t.hash, block.hash);
            assert_ne!(t.compute_hash(), t.hash);
        }
    }
}
