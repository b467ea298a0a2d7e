use crate::errors::{AppError, AppResult};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base name of the optional config file in the working directory
pub const CONFIG_FILE_NAME: &str = "nockstats";

/// Prefix for environment overrides, e.g. `NOCKSTATS_WALLET__TIMEOUT_SECONDS`
pub const ENV_PREFIX: &str = "NOCKSTATS";

/// Narrowest wallet column that still fits one character either side of
/// the ellipsis
pub const MIN_DISPLAY_WIDTH: usize = 5;

/// Application configuration loaded from nockstats.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub wallet: WalletConfig,
    pub report: ReportConfig,
}

/// How to reach the nockchain wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    pub socket_path: PathBuf,
    pub binary: String,
    pub timeout_seconds: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(".socket/nockchain_npc.sock"),
            binary: "nockchain-wallet".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl WalletConfig {
    pub fn validate(&self) -> AppResult<()> {
        if self.timeout_seconds == 0 {
            return Err(AppError::Config(
                "wallet.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if self.binary.trim().is_empty() {
            return Err(AppError::Config("wallet.binary must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Report rendering options passed into the analysis pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Wallet column width; longer signatures are truncated for display
    pub max_display_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_display_width: 36,
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> AppResult<()> {
        if self.max_display_width < MIN_DISPLAY_WIDTH {
            return Err(AppError::Config(format!(
                "report.max_display_width must be at least {} (got {})",
                MIN_DISPLAY_WIDTH, self.max_display_width
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from nockstats.toml and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE_NAME)
    }

    /// Load configuration using `file_name` (extension optional) as the file source
    pub fn load_from(file_name: &str) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default(
                "wallet.socket_path",
                defaults.wallet.socket_path.to_string_lossy().to_string(),
            )?
            .set_default("wallet.binary", defaults.wallet.binary)?
            .set_default("wallet.timeout_seconds", defaults.wallet.timeout_seconds)?
            .set_default(
                "report.max_display_width",
                defaults.report.max_display_width as i64,
            )?
            // Load from nockstats.toml if it exists
            .add_source(File::with_name(file_name).required(false))
            // NOCKSTATS_WALLET__SOCKET_PATH overrides wallet.socket_path
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn validate(&self) -> AppResult<()> {
        self.wallet.validate()?;
        self.report.validate()
    }
}
