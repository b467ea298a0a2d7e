//! Miner ranking by completed blocks

use super::blocks::BlocksMined;
use crate::types::RankedEntry;
use crate::utils::math::safe_percentage;

/// Order miners by blocks mined, descending
///
/// The sort is stable over first-seen order, so miners with equal block
/// counts rank in the order their signature first appeared in the dump.
/// Ranks are never shared.
pub fn rank_miners(blocks: &BlocksMined) -> Vec<RankedEntry> {
    let total = blocks.total_blocks();

    let mut sorted: Vec<(&str, u64)> = blocks.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, (signature, mined))| RankedEntry {
            rank: i + 1,
            signature: signature.to_string(),
            blocks: mined,
            percentage: safe_percentage(mined, total),
        })
        .collect()
}
