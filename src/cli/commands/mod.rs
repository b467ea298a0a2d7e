//! Subcommand implementations and shared report plumbing

pub mod parse;
pub mod stats;

use crate::analysis::{MiningStatsEngine, OutputFormat};
use crate::config::ReportConfig;
use crate::errors::AppResult;
use crate::wallet::NoteSource;
use clap::Args;
use tracing::info;

/// Console banner printed before a report
pub const BANNER: &str = "⛏️  Nockchain Mining Statistics Analyzer";

/// Report options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Wallet column width; longer signatures are truncated (overrides nockstats.toml)
    #[arg(long)]
    pub width: Option<usize>,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl ReportArgs {
    /// CLI arguments override config values
    pub fn resolve(&self, config: &ReportConfig) -> AppResult<ReportConfig> {
        let resolved = ReportConfig {
            max_display_width: self.width.unwrap_or(config.max_display_width),
        };
        resolved.validate()?;
        Ok(resolved)
    }

    pub fn output_format(&self) -> OutputFormat {
        parse_format(&self.format)
    }
}

/// Parse output format string to OutputFormat enum
pub fn parse_format(format_str: &str) -> OutputFormat {
    match format_str.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Console,
    }
}

/// Read the dump, run the pipeline and print the report
pub async fn analyse_source(
    source: &NoteSource,
    report_config: ReportConfig,
    format: &OutputFormat,
) -> AppResult<()> {
    if *format == OutputFormat::Console {
        println!("{}", BANNER);
        println!("{}", "=".repeat(45));
    }

    info!("Reading wallet notes from {}", source.describe());
    let raw = source.read_raw().await?;

    let engine = MiningStatsEngine::new(report_config);
    let report = engine.analyse(&raw);
    info!(
        "Ranked {} miners over {} complete blocks",
        report.total_miners, report.total_blocks
    );

    print!("{}", engine.render(&report, format)?);
    Ok(())
}
