//! Error types for the store module.

use hashchain_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while setting up a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The block offered as genesis is not a valid chain root.
    #[error("invalid genesis block: {0}")]
    InvalidGenesis(#[source] ValidationError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
