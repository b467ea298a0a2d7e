use std::path::PathBuf;
use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Wallet data acquisition
    #[error("{0}")]
    Acquisition(#[from] AcquisitionError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON export
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of the external wallet tool. All of them are fatal: the
/// pipeline never runs on partial output.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    /// Socket path does not exist
    #[error("socket not found at {}", path.display())]
    SocketNotFound { path: PathBuf },

    /// Path exists but is not a Unix domain socket
    #[error("{} is not a valid socket", path.display())]
    SocketInvalid { path: PathBuf },

    /// Wallet command exceeded its timeout
    #[error("{command} command timed out after {timeout_seconds} seconds")]
    Timeout {
        command: String,
        timeout_seconds: u64,
    },

    /// Wallet binary could not be spawned because it is not on PATH
    #[error("{binary} binary not found in PATH")]
    BinaryNotFound { binary: String },

    /// Wallet command ran but exited unsuccessfully
    #[error("{command} failed with return code {code} ({stderr})")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// Wallet printed something that is not UTF-8 text
    #[error("{command} output is not valid UTF-8: {source}")]
    InvalidOutput {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Any other failure to spawn or wait on the wallet process
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for wallet acquisition
pub type AcquisitionResult<T> = Result<T, AcquisitionError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
