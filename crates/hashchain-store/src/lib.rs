//! # Hashchain Store
//!
//! Ownership of the authoritative chain. Provides a trait-based interface so
//! the node is agnostic to how the chain is held, with [`MemoryChainStore`] as
//! the in-process implementation.
//!
//! ## Key Types
//!
//! - [`ChainStore`] - The trait for reading and replacing the chain
//! - [`MemoryChainStore`] - Lock-guarded in-memory chain
//! - [`Replacement`] - Outcome of offering a candidate chain
//! - [`RejectReason`] - Why a candidate was discarded
//!
//! ## Usage
//!
//! ```rust
//! use hashchain_core::extend;
//! use hashchain_store::{ChainStore, MemoryChainStore};
//!
//! let store = MemoryChainStore::with_genesis_payload(0);
//! let snapshot = store.snapshot();
//! let block = extend(&store.tip(), 42);
//!
//! let outcome = store.propose_replacement(snapshot.extended(block));
//! assert!(outcome.is_accepted());
//! assert_eq!(store.len(), 2);
//! ```
//!
//! ## Design Notes
//!
//! - **Always initialized**: a store is constructed from its genesis block,
//!   so there is no state in which the chain is empty.
//! - **Full validation**: a candidate is checked end-to-end before lengths
//!   are compared.
//! - **Strictly longer wins**: equal or shorter candidates are discarded
//!   without error.
//! - **Whole-chain swaps**: published chains are shared as `Arc<Chain>` and
//!   never mutated; readers see either the old or the new chain.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryChainStore;
pub use traits::{ChainStore, RejectReason, Replacement};
