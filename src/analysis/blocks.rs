//! Completed-block derivation from signature counts
//!
//! Every mined block produces two coinbase notes signed by the same key, so
//! a signature seen `n` times has completed `n / 2` blocks. A leftover odd
//! occurrence is an in-flight reward and is dropped without a warning;
//! signatures seen once never show up, not even with zero blocks.

use super::aggregator::SignatureCounts;

/// Coinbase notes produced per completed block
pub const SIGNATURES_PER_BLOCK: u64 = 2;

/// Completed blocks per signature, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlocksMined {
    entries: Vec<(String, u64)>,
}

impl BlocksMined {
    pub fn get(&self, signature: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == signature)
            .map(|(_, blocks)| *blocks)
    }

    /// Number of miners with at least one completed block
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_blocks(&self) -> u64 {
        self.entries.iter().map(|(_, blocks)| blocks).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(signature, blocks)| (signature.as_str(), *blocks))
    }
}

/// Convert occurrence counts into completed blocks per signature
pub fn calculate_mined_blocks(counts: &SignatureCounts) -> BlocksMined {
    let entries = counts
        .iter()
        .filter(|(_, count)| *count >= SIGNATURES_PER_BLOCK)
        .map(|(signature, count)| (signature.to_string(), count / SIGNATURES_PER_BLOCK))
        .collect();

    BlocksMined { entries }
}
