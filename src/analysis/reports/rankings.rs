//! Miner ranking report formatter
//!
//! Console output is a fixed-width table followed by a summary block:
//!
//! ```text
//! Miner Rankings (out of 3 full coinbase blocks):
//!    #  WALLET                               BLOCKS      %
//! ------------------------------------------------------------
//!   #1  abcdefghijklmnop...IJKLMNOPQRSTUVWX       2  66.7%
//! ```

use super::utils::{export_json, truncate_identifier};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::MiningStatsReport;
use crate::utils::time::format_report_timestamp;

/// Shown when the dump holds no coinbase notes at all
pub const NO_COINBASE_MESSAGE: &str = "No coinbase blocks found in wallet data.";

/// Shown when coinbase notes exist but no signature completed a block
pub const NO_COMPLETE_BLOCKS_MESSAGE: &str = "No complete coinbase blocks found.";

/// Columns taken by everything except the wallet column
const FIXED_COLUMNS: usize = 24;

/// Format the miner rankings report
pub fn format_mining_rankings(
    report: &MiningStatsReport,
    max_display_width: usize,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Console => Ok(format_console(report, max_display_width)),
    }
}

fn format_console(report: &MiningStatsReport, width: usize) -> String {
    let mut output = String::new();

    if !report.has_coinbase_entries() {
        output.push_str(NO_COINBASE_MESSAGE);
        output.push('\n');
        return output;
    }
    if report.is_empty() {
        output.push_str(NO_COMPLETE_BLOCKS_MESSAGE);
        output.push('\n');
        return output;
    }

    output.push_str(&format!(
        "\nMiner Rankings (out of {} full coinbase blocks):\n",
        report.total_blocks
    ));
    output.push_str(&format!(
        "{:>4}  {:<width$} {:>6} {:>6}\n",
        "#",
        "WALLET",
        "BLOCKS",
        "%",
        width = width
    ));
    output.push_str(&"-".repeat(width + FIXED_COLUMNS));
    output.push('\n');

    for entry in &report.rankings {
        output.push_str(&format!(
            "{:>4}  {:<width$} {:>6} {:>5.1}%\n",
            format!("#{}", entry.rank),
            truncate_identifier(&entry.signature, width),
            entry.blocks,
            entry.percentage,
            width = width
        ));
    }

    output.push_str("\nSummary:\n");
    output.push_str(&format!("  Total miners: {}\n", report.total_miners));
    output.push_str(&format!("  Total blocks: {}\n", report.total_blocks));
    output.push_str(&format!(
        "  Average blocks per miner: {:.1}\n",
        report.average_blocks
    ));
    output.push_str(&format!(
        "  Last updated: {}\n",
        format_report_timestamp(&report.generated_at)
    ));

    output
}
