//! Report model for miner rankings
//!
//! Everything here is derived output: built fresh from the raw wallet dump on
//! every run and never persisted.

use chrono::{DateTime, Local};
use serde::Serialize;

/// One row of the ranking table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-based position; ties get consecutive ranks
    pub rank: usize,
    /// Normalized reward signature (full, never truncated)
    pub signature: String,
    /// Completed coinbase blocks attributed to this signature
    pub blocks: u64,
    /// Share of all completed blocks, 0.0 to 100.0
    pub percentage: f64,
}

/// Complete result of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct MiningStatsReport {
    /// Coinbase entries extracted from the dump
    pub total_entries: usize,
    /// Coinbase markers that produced no entry
    pub discarded_markers: usize,
    /// Distinct normalized signatures among the entries
    pub unique_signatures: usize,
    pub total_blocks: u64,
    pub total_miners: usize,
    pub average_blocks: f64,
    pub generated_at: DateTime<Local>,
    pub rankings: Vec<RankedEntry>,
}

impl MiningStatsReport {
    /// True when the dump contained at least one coinbase entry
    pub fn has_coinbase_entries(&self) -> bool {
        self.total_entries > 0
    }

    /// True when no signature reached a completed block
    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }
}
