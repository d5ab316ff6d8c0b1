//! Block validation: linkage and fingerprint checks.

use crate::block::Block;
use crate::error::ValidationError;

/// Validate `candidate` as the direct successor of `predecessor`.
///
/// Checks, in order, stopping at the first failure:
/// 1. `candidate.index == predecessor.index + 1`
/// 2. `candidate.prev_hash == predecessor.hash`
/// 3. `candidate.hash` matches its recomputed fingerprint
pub fn validate_link(candidate: &Block, predecessor: &Block) -> Result<(), ValidationError> {
    // 1. Index
    let expected = predecessor
        .index
        .checked_add(1)
        .ok_or(ValidationError::IndexOverflow)?;
    if candidate.index != expected {
        return Err(ValidationError::IndexMismatch {
            expected,
            got: candidate.index,
        });
    }

    // 2. Linkage
    if !candidate.follows(predecessor) {
        return Err(ValidationError::PrevHashMismatch {
            expected: predecessor.hash.clone(),
            got: candidate.prev_hash.clone(),
        });
    }

    // 3. Fingerprint
    check_hash(candidate)
}

/// Boolean form of [`validate_link`].
pub fn is_valid(candidate: &Block, predecessor: &Block) -> bool {
    validate_link(candidate, predecessor).is_ok()
}

/// Validate a block as a chain root: index 0, empty prev_hash, correct fingerprint.
pub fn validate_genesis(block: &Block) -> Result<(), ValidationError> {
    if !block.is_genesis() {
        return Err(if block.index != 0 {
            ValidationError::NotGenesis(block.index)
        } else {
            ValidationError::GenesisHasPrevHash
        });
    }
    check_hash(block)
}

/// Validate a whole chain: genesis identity, then every adjacent pair.
///
/// Errors are wrapped with the position of the first offending block.
pub fn validate_chain(blocks: &[Block]) -> Result<(), ValidationError> {
    let (genesis, _) = blocks.split_first().ok_or(ValidationError::EmptyChain)?;
    validate_genesis(genesis).map_err(|e| e.at(0))?;

    for (i, pair) in blocks.windows(2).enumerate() {
        validate_link(&pair[1], &pair[0]).map_err(|e| e.at(i + 1))?;
    }

    Ok(())
}

fn check_hash(block: &Block) -> Result<(), ValidationError> {
    let computed = block.compute_hash();
    if computed != block.hash {
        return Err(ValidationError::HashMismatch {
            expected: computed,
            got: block.hash.clone(),
        });
    }
    Ok(())
}
