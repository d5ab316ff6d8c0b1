//! Block: one entry in the ledger.
//!
//! A block is immutable once built. Its `hash` binds the other four fields
//! together, and its `prev_hash` binds it to its predecessor.

use serde::{Deserialize, Serialize};

use crate::crypto::fingerprint;

/// A single ledger entry.
///
/// Serialized with the field names used on the wire:
/// `Index`, `Timestamp`, `Data`, `Hash`, `PrevHash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain. Genesis is 0.
    #[serde(rename = "Index")]
    pub index: u64,

    /// Creation time (RFC 3339). Recorded once, never recomputed.
    #[serde(rename = "Timestamp")]
    pub timestamp: String,

    /// Caller-supplied value. Opaque to the chain.
    #[serde(rename = "Data")]
    pub payload: i64,

    /// Hex SHA-256 fingerprint of this block's fields.
    #[serde(rename = "Hash")]
    pub hash: String,

    /// Fingerprint of the predecessor (empty for genesis).
    #[serde(rename = "PrevHash")]
    pub prev_hash: String,
}

impl Block {
    /// Recompute this block's fingerprint from its own fields.
    pub fn compute_hash(&self) -> String {
        fingerprint(self)
    }

    /// Genesis shape: index 0 and no predecessor.
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.prev_hash.is_empty()
    }

    /// Check if this block claims `other` as its predecessor.
    pub fn follows(&self, other: &Block) -> bool {
        self.prev_hash == other.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BlockBuilder;

    fn make_block() -> Block {
        BlockBuilder::new(3)
            .timestamp("2024-01-01T00:00:00Z")
            .prev_hash("ab".repeat(32))
            .payload(7)
            .build()
    }

    #[test]
    fn test_compute_hash_matches_stored() {
        let block = make_block();
        assert_eq!(block.compute_hash(), block.hash);
    }

    #[test]
    fn test_json_field_names() {
        let block = make_block();
        let json = serde_json::to_value(&block).unwrap();

        assert_eq!(json["Index"], 3);
        assert_eq!(json["Data"], 7);
        assert_eq!(json["Timestamp"], "2024-01-01T00:00:00Z");
        assert_eq!(json["PrevHash"], "ab".repeat(32));
        assert_eq!(json["Hash"], block.hash);
    }

    #[test]
    fn test_json_roundtrip_keeps_hash_valid() {
        let block = make_block();
        let json = serde_json::to_string(&block).unwrap();
        let decoded: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, block);
        assert_eq!(decoded.compute_hash(), decoded.hash);
    }

    #[test]
    fn test_is_genesis() {
        let genesis = BlockBuilder::new(0).timestamp("t0").build();
        assert!(genesis.is_genesis());

        let child = make_block();
        assert!(!child.is_genesis());
    }

    #[test]
    fn test_follows() {
        let genesis = BlockBuilder::new(0).timestamp("t0").build();
        let child = BlockBuilder::after(&genesis).timestamp("t1").build();
        assert!(child.follows(&genesis));
        assert!(!genesis.follows(&child));
    }
}
