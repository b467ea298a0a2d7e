//! Mining statistics pipeline
//!
//! Turns the raw text of a `list-notes` wallet dump into a miner ranking:
//!
//! - **Extraction** - coinbase signature payloads, in textual order
//! - **Aggregation** - whitespace-normalized signature occurrence counts
//! - **Block calculation** - two coinbase notes per completed block
//! - **Ranking** - blocks descending, ties by first appearance
//! - **Report generation** - console table or JSON
//!
//! Every stage is pure and total over its input; only text acquisition can
//! fail, and it happens before the pipeline runs.
//!
//! ## Usage
//!
//! ```rust
//! use nock_mining_stats::analysis::{MiningStatsEngine, OutputFormat};
//! use nock_mining_stats::config::ReportConfig;
//! use nock_mining_stats::errors::AppResult;
//!
//! fn example(raw: &str) -> AppResult<()> {
//!     let engine = MiningStatsEngine::new(ReportConfig::default());
//!     let report = engine.analyse(raw);
//!     print!("{}", engine.render(&report, &OutputFormat::Console)?);
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod blocks;
pub mod extractor;
pub mod ranking;
pub mod reports;

// Re-export main types and interfaces
pub use aggregator::{count_signatures, normalize_signature, SignatureCounts};
pub use blocks::{calculate_mined_blocks, BlocksMined};
pub use extractor::{extract_coinbase_entries, CoinbaseScanner, Extraction};
pub use ranking::rank_miners;
pub use reports::{OutputFormat, ReportFormatter};

use crate::config::ReportConfig;
use crate::errors::AppResult;
use crate::types::MiningStatsReport;
use crate::utils::math::safe_average;
use chrono::{DateTime, Local};
use tracing::debug;

/// Runs the extraction-to-ranking pipeline with an explicit report config
pub struct MiningStatsEngine {
    config: ReportConfig,
}

impl MiningStatsEngine {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Analyse a wallet dump, stamping the report with the current time
    pub fn analyse(&self, raw: &str) -> MiningStatsReport {
        self.analyse_at(raw, Local::now())
    }

    /// Analyse a wallet dump with a caller-supplied generation time
    pub fn analyse_at(&self, raw: &str, generated_at: DateTime<Local>) -> MiningStatsReport {
        debug!("Analysing {} bytes of wallet data", raw.len());

        let extraction = extract_coinbase_entries(raw);
        debug!(
            "Found {} raw coinbase signature entries ({} markers, {} discarded)",
            extraction.payloads.len(),
            extraction.markers_seen,
            extraction.discarded_markers()
        );

        let counts = count_signatures(&extraction.payloads);
        debug!("Processed signatures for {} unique wallets", counts.len());

        let blocks = calculate_mined_blocks(&counts);
        let total_blocks = blocks.total_blocks();
        debug!("Calculated {} total complete coinbase blocks", total_blocks);

        let rankings = rank_miners(&blocks);

        MiningStatsReport {
            total_entries: extraction.payloads.len(),
            discarded_markers: extraction.discarded_markers(),
            unique_signatures: counts.len(),
            total_blocks,
            total_miners: blocks.len(),
            average_blocks: safe_average(total_blocks, blocks.len()),
            generated_at,
            rankings,
        }
    }

    /// Render a report in the requested format
    pub fn render(&self, report: &MiningStatsReport, format: &OutputFormat) -> AppResult<String> {
        ReportFormatter::format_mining_rankings(report, self.config.max_display_width, format)
    }
}
