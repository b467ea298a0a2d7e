use super::{analyse_source, ReportArgs};
use crate::config::{AppConfig, WalletConfig};
use crate::errors::AppResult;
use crate::wallet::{NoteSource, WalletClient};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args)]
pub struct StatsCommand {
    /// Path to nockchain socket (overrides nockstats.toml and env vars)
    #[arg(long)]
    socket: Option<PathBuf>,

    /// Timeout for wallet commands in seconds (overrides nockstats.toml)
    #[arg(long)]
    timeout: Option<u64>,

    /// Wallet binary to invoke (overrides nockstats.toml)
    #[arg(long)]
    binary: Option<String>,

    #[command(flatten)]
    report: ReportArgs,
}

impl StatsCommand {
    pub async fn run(&self) -> AppResult<()> {
        let app_config = load_config()?;

        // CLI arguments override config values
        let wallet = WalletConfig {
            socket_path: self
                .socket
                .clone()
                .unwrap_or_else(|| app_config.wallet.socket_path.clone()),
            binary: self
                .binary
                .clone()
                .unwrap_or_else(|| app_config.wallet.binary.clone()),
            timeout_seconds: self.timeout.unwrap_or(app_config.wallet.timeout_seconds),
        };
        wallet.validate()?;
        let report_config = self.report.resolve(&app_config.report)?;

        info!("Configuration:");
        info!("  Socket: {}", wallet.socket_path.display());
        info!("  Wallet binary: {}", wallet.binary);
        info!("  Timeout: {}s", wallet.timeout_seconds);
        info!("  Display width: {}", report_config.max_display_width);

        let source = NoteSource::Wallet(WalletClient::new(&wallet));
        analyse_source(&source, report_config, &self.report.output_format()).await
    }
}

/// Load configuration from file/environment
pub(crate) fn load_config() -> AppResult<AppConfig> {
    match AppConfig::load() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            Ok(config)
        }
        Err(e) => {
            warn!("Failed to load configuration: {}", e);
            Err(e.into())
        }
    }
}
