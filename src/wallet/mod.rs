//! Nockchain wallet integration module
//!
//! - **Client** - runs `nockchain-wallet list-notes` against the node socket
//! - **Source** - where the raw wallet dump comes from (wallet, file, stdin)
//!
//! Acquisition is the only fallible, blocking step of a run. Any failure is
//! fatal and no analysis happens on partial output.

pub mod client;
pub mod source;

// Re-export main types
pub use client::{WalletClient, LIST_NOTES_COMMAND, SOCKET_FLAG};
pub use source::NoteSource;
