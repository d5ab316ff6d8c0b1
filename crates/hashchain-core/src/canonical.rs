//! Canonical encoding of block fields for fingerprinting.
//!
//! Layout:
//!
//! ```text
//! BLOCK_DOMAIN || field(index) || field(timestamp) || field(prev_hash) || field(payload)
//! field(x) = len(text(x)) as u64 big-endian || text(x)
//! ```
//!
//! Integers are encoded as their decimal text, strings as their UTF-8 bytes.
//! Every field carries its own length, so no two distinct field tuples share
//! an encoding.
//!
//! **CRITICAL**: This encoding is FROZEN. Changing it invalidates every stored hash.

use crate::block::Block;

/// Domain separation prefix for block fingerprints.
pub const BLOCK_DOMAIN: &[u8] = b"hashchain/block/v1";

/// Encode block fields to canonical bytes.
pub fn canonical_fields(index: u64, timestamp: &str, prev_hash: &str, payload: i64) -> Vec<u8> {
    let index = index.to_string();
    let payload = payload.to_string();

    let mut out = Vec::with_capacity(
        BLOCK_DOMAIN.len() + 4 * 8 + index.len() + timestamp.len() + prev_hash.len() + payload.len(),
    );
    out.extend_from_slice(BLOCK_DOMAIN);
    put_field(&mut out, index.as_bytes());
    put_field(&mut out, timestamp.as_bytes());
    put_field(&mut out, prev_hash.as_bytes());
    put_field(&mut out, payload.as_bytes());
    out
}

/// Encode a block's hashed fields to canonical bytes.
///
/// The stored `hash` is not part of the encoding.
pub fn canonical_block_bytes(block: &Block) -> Vec<u8> {
    canonical_fields(block.index, &block.timestamp, &block.prev_hash, block.payload)
}

fn put_field(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(&(bytes.len() as u64).to_be_bytes());
    out.extend_from_slice(bytes);
}
