//! # Hashchain Testkit
//!
//! Testing utilities for hashchain.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Reproducible genesis blocks and chains, plus tampering helpers
//! - **Generators**: Proptest strategies for blocks and valid chains
//!
//! ## Test Fixtures
//!
//! ```rust
//! use hashchain_testkit::fixtures::ChainFixture;
//!
//! let fixture = ChainFixture::new();
//! let chain = fixture.chain(&[1, 2, 3]);
//! assert_eq!(chain.len(), 4);
//! assert!(chain.validate().is_ok());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hashchain_testkit::generators::valid_chain;
//!
//! proptest! {
//!     #[test]
//!     fn chains_validate(chain in valid_chain(16)) {
//!         prop_assert!(chain.validate().is_ok());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{tamper, ChainFixture, Field};
pub use generators::{block_fields, valid_chain, BlockFields};
