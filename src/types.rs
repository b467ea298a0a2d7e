//! Nockchain mining statistics - type system
//!
//! - `mining_stats`: Ranked miner entries and the report model shared by the
//!   console and JSON renderers

pub mod mining_stats;

pub use mining_stats::*;
