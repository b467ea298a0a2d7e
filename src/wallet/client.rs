use crate::config::WalletConfig;
use crate::errors::{AcquisitionError, AcquisitionResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Wallet subcommand that dumps every note known to the wallet
pub const LIST_NOTES_COMMAND: &str = "list-notes";

/// Flag naming the node socket the wallet talks to
pub const SOCKET_FLAG: &str = "--nockchain-socket";

/// Thin wrapper over the `nockchain-wallet` binary
#[derive(Debug, Clone)]
pub struct WalletClient {
    socket_path: PathBuf,
    binary: String,
    timeout: Duration,
}

impl WalletClient {
    pub fn new(config: &WalletConfig) -> Self {
        Self {
            socket_path: config.socket_path.clone(),
            binary: config.binary.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    /// Override the command timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Check that the node socket exists and is a Unix domain socket
    pub fn verify_socket(&self) -> AcquisitionResult<()> {
        let metadata = std::fs::metadata(&self.socket_path).map_err(|_| {
            AcquisitionError::SocketNotFound {
                path: self.socket_path.clone(),
            }
        })?;

        if !is_socket(&metadata) {
            return Err(AcquisitionError::SocketInvalid {
                path: self.socket_path.clone(),
            });
        }
        Ok(())
    }

    /// Fetch the raw `list-notes` dump
    pub async fn list_notes(&self) -> AcquisitionResult<String> {
        self.verify_socket()?;
        self.run(LIST_NOTES_COMMAND).await
    }

    async fn run(&self, subcommand: &str) -> AcquisitionResult<String> {
        debug!("Running {} command...", subcommand);

        let mut command = Command::new(&self.binary);
        command
            .arg(SOCKET_FLAG)
            .arg(&self.socket_path)
            .arg(subcommand)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
                return Err(AcquisitionError::BinaryNotFound {
                    binary: self.binary.clone(),
                })
            }
            Ok(Err(e)) => {
                return Err(AcquisitionError::Spawn {
                    command: subcommand.to_string(),
                    source: e,
                })
            }
            Err(_) => {
                return Err(AcquisitionError::Timeout {
                    command: subcommand.to_string(),
                    timeout_seconds: self.timeout.as_secs(),
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AcquisitionError::CommandFailed {
                command: subcommand.to_string(),
                // Killed by a signal: no exit code to report
                code: output.status.code().unwrap_or(-1),
                stderr: if stderr.is_empty() {
                    "Unknown error".to_string()
                } else {
                    stderr
                },
            });
        }

        let raw =
            String::from_utf8(output.stdout).map_err(|source| AcquisitionError::InvalidOutput {
                command: subcommand.to_string(),
                source,
            })?;
        debug!("Retrieved {} bytes of wallet data", raw.len());
        Ok(raw)
    }
}

#[cfg(unix)]
fn is_socket(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::FileTypeExt;
    metadata.file_type().is_socket()
}

#[cfg(not(unix))]
fn is_socket(_metadata: &std::fs::Metadata) -> bool {
    false
}
