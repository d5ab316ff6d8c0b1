//! # Hashchain
//!
//! The unified API for hashchain: an in-memory, hash-linked, append-only
//! ledger that always serves the longest fully valid chain it has seen.
//!
//! ## Key Concepts
//!
//! - **Block**: Immutable. Linked to its predecessor by fingerprint.
//! - **Chain**: Genesis to tip. Replaced whole, never edited.
//! - **Selection**: A candidate chain wins only if it is fully valid and
//!   strictly longer than the current one.
//!
//! ## Usage
//!
//! ```rust
//! use hashchain::{AppendOutcome, Node, NodeConfig};
//!
//! let node = Node::in_memory(NodeConfig::default());
//!
//! match node.append(42).unwrap() {
//!     AppendOutcome::Accepted(block) => assert_eq!(block.index, 1),
//!     AppendOutcome::Superseded { .. } => unreachable!("no concurrent writers"),
//! }
//!
//! assert_eq!(node.get_chain().len(), 2);
//! ```
//!
//! ## Re-exports
//!
//! - `hashchain::core` - Blocks, fingerprints, validation
//! - `hashchain::store` - Chain ownership and selection

pub mod error;
pub mod node;

// Re-export component crates
pub use hashchain_core as core;
pub use hashchain_store as store;

// Re-export main types for convenience
pub use error::{NodeError, Result};
pub use node::{AppendOutcome, Node, NodeConfig};

// Re-export commonly used core types
pub use hashchain_core::{Block, Chain, ValidationError};
pub use hashchain_store::{ChainStore, MemoryChainStore, RejectReason, Replacement};
