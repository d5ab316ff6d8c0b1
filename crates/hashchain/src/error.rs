//! Error types for the node.

use hashchain_core::ValidationError;
use hashchain_store::StoreError;
use thiserror::Error;

/// Errors that can occur during node operations.
#[derive(Debug, Error)]
pub enum NodeError {
    /// A freshly built block did not validate against the tip it extends.
    ///
    /// Indicates a clock or hashing inconsistency; the chain is unchanged.
    #[error("new block failed validation: {0}")]
    ValidationFailed(#[source] ValidationError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for node operations.
pub type Result<T> = std::result::Result<T, NodeError>;
