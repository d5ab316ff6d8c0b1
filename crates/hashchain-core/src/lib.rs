//! # Hashchain Core
//!
//! Pure primitives for hashchain: blocks, fingerprints, chain construction and
//! validation.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over hash-linked blocks.
//!
//! ## Key Types
//!
//! - [`Block`] - One ledger entry, linked to its predecessor by fingerprint
//! - [`Chain`] - An ordered sequence of blocks from genesis to tip
//! - [`BlockBuilder`] - Builds blocks with explicit fields
//!
//! ## Fingerprints
//!
//! Every block's `hash` is SHA-256 over a length-prefixed encoding of its
//! fields. See [`canonical`] module.

pub mod block;
pub mod builder;
pub mod canonical;
pub mod chain;
pub mod crypto;
pub mod error;
pub mod validation;

pub use block::Block;
pub use builder::{extend, genesis, now_timestamp, BlockBuilder};
pub use canonical::{canonical_block_bytes, canonical_fields, BLOCK_DOMAIN};
pub use chain::Chain;
pub use crypto::{fingerprint, sha256_hex};
pub use error::ValidationError;
pub use validation::{is_valid, validate_chain, validate_genesis, validate_link};
