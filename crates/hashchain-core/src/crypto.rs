//! SHA-256 block fingerprints.

use sha2::{Digest, Sha256};

use crate::block::Block;
use crate::canonical::canonical_block_bytes;

/// Lowercase hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Compute the fingerprint of a block: hex SHA-256 of its canonical bytes.
pub fn fingerprint(block: &Block) -> String {
    sha256_hex(&canonical_block_bytes(block))
}
