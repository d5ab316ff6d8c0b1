//! Block construction.
//!
//! [`extend`] is the normal path: it stamps the current time and links the new
//! block to its predecessor. [`BlockBuilder`] sets every field explicitly and is
//! what fixtures use to get reproducible hashes.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::block::Block;
use crate::canonical::canonical_fields;
use crate::crypto::sha256_hex;

/// Current wall-clock time as an RFC 3339 string (UTC).
pub fn now_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339).unwrap_or_else(|_| now.to_string())
}

/// Create a genesis block stamped with the current time.
pub fn genesis(payload: i64) -> Block {
    BlockBuilder::new(0)
        .timestamp(now_timestamp())
        .payload(payload)
        .build()
}

/// Create a block extending `predecessor` with `payload`.
///
/// The new block has `index = predecessor.index + 1`, `prev_hash =
/// predecessor.hash`, and a fresh timestamp. Reads the clock; touches nothing else.
///
/// A predecessor at `u64::MAX` has no successor. The index saturates and the
/// result fails [`validate_link`](crate::validation::validate_link) with
/// `IndexOverflow`.
pub fn extend(predecessor: &Block, payload: i64) -> Block {
    BlockBuilder::after(predecessor)
        .timestamp(now_timestamp())
        .payload(payload)
        .build()
}

/// Builder for blocks with explicit fields.
#[derive(Debug, Clone)]
pub struct BlockBuilder {
    index: u64,
    timestamp: String,
    prev_hash: String,
    payload: i64,
}

impl BlockBuilder {
    /// Start a block at `index` with empty timestamp, empty prev_hash and zero payload.
    pub fn new(index: u64) -> Self {
        Self {
            index,
            timestamp: String::new(),
            prev_hash: String::new(),
            payload: 0,
        }
    }

    /// Start the successor of `predecessor`. Saturates at `u64::MAX`.
    pub fn after(predecessor: &Block) -> Self {
        Self::new(predecessor.index.saturating_add(1)).prev_hash(predecessor.hash.clone())
    }

    /// Set the timestamp.
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Set the predecessor fingerprint.
    pub fn prev_hash(mut self, prev_hash: impl Into<String>) -> Self {
        self.prev_hash = prev_hash.into();
        self
    }

    /// Set the payload.
    pub fn payload(mut self, payload: i64) -> Self {
        self.payload = payload;
        self
    }

    /// Finish the block, computing its fingerprint.
    pub fn build(self) -> Block {
        let hash = sha256_hex(&canonical_fields(
            self.index,
            &self.timestamp,
            &self.prev_hash,
            self.payload,
        ));

        Block {
            index: self.index,
            timestamp: self.timestamp,
            payload: self.payload,
            hash,
            prev_hash: self.prev_hash,
        }
    }
}
