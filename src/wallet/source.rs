//! Raw wallet dump sources

use super::WalletClient;
use crate::errors::AppResult;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Where the raw `list-notes` text comes from
#[derive(Debug, Clone)]
pub enum NoteSource {
    /// Live query against the wallet over the node socket
    Wallet(WalletClient),
    /// A previously saved dump
    File(PathBuf),
    /// A dump piped into the process
    Stdin,
}

impl NoteSource {
    /// Read the whole dump; any failure aborts the run
    pub async fn read_raw(&self) -> AppResult<String> {
        let raw = match self {
            NoteSource::Wallet(client) => client.list_notes().await?,
            NoteSource::File(path) => {
                debug!("Reading wallet dump from {}", path.display());
                tokio::fs::read_to_string(path).await?
            }
            NoteSource::Stdin => {
                debug!("Reading wallet dump from stdin");
                let mut raw = String::new();
                tokio::io::stdin().read_to_string(&mut raw).await?;
                raw
            }
        };
        Ok(raw)
    }

    pub fn describe(&self) -> String {
        match self {
            NoteSource::Wallet(client) => {
                format!("wallet socket {}", client.socket_path().display())
            }
            NoteSource::File(path) => format!("file {}", path.display()),
            NoteSource::Stdin => "stdin".to_string(),
        }
    }
}
