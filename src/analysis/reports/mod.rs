//! Report formatting and output generation
//!
//! Provides formatting for analysis results via the [`ReportFormatter`] facade.
//! Supports Console and JSON output formats.

pub mod rankings;
pub mod utils;

use crate::errors::AppResult;
use crate::types::MiningStatsReport;

/// Output format options for analysis reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_mining_rankings(
        r: &MiningStatsReport,
        max_display_width: usize,
        f: &OutputFormat,
    ) -> AppResult<String> {
        rankings::format_mining_rankings(r, max_display_width, f)
    }
}
