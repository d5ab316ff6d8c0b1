//! Proptest generators for property-based testing.

use proptest::prelude::*;

use hashchain_core::{Block, BlockBuilder, Chain};

use crate::fixtures::ChainFixture;

/// Raw inputs for building a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFields {
    pub index: u64,
    pub timestamp: String,
    pub prev_hash: String,
    pub payload: i64,
}

impl BlockFields {
    /// Build the block these fields describe.
    pub fn build(&self) -> Block {
        BlockBuilder::new(self.index)
            .timestamp(self.timestamp.clone())
            .prev_hash(self.prev_hash.clone())
            .payload(self.payload)
            .build()
    }
}

/// Generate an RFC 3339-looking timestamp, or arbitrary short text.
pub fn timestamp() -> impl Strategy<Value = String> {
    prop_oneof![
        "20[0-9]{2}-[01][0-9]-[0-3][0-9]T[0-2][0-9]:[0-5][0-9]:[0-5][0-9](\\.[0-9]{1,9})?Z",
        ".{0,24}",
    ]
}

/// Generate a prev_hash: empty, 64 hex chars, or digits that could blur into a payload.
pub fn prev_hash() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[0-9a-f]{64}", "[0-9]{1,4}"]
}

/// Generate arbitrary block fields.
pub fn block_fields() -> impl Strategy<Value = BlockFields> {
    (any::<u64>(), timestamp(), prev_hash(), any::<i64>()).prop_map(
        |(index, timestamp, prev_hash, payload)| BlockFields {
            index,
            timestamp,
            prev_hash,
            payload,
        },
    )
}

impl Arbitrary for BlockFields {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        block_fields().boxed()
    }
}

/// Generate a valid chain of 1 to `max_len` blocks rooted at the fixture genesis.
pub fn valid_chain(max_len: usize) -> impl Strategy<Value = Chain> {
    prop::collection::vec(any::<i64>(), 0..max_len.max(1))
        .prop_map(|payloads| ChainFixture::new().chain(&payloads))
}
