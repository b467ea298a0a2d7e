//! Nockchain Mining Statistics Analyser
//!

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod types;
pub mod utils;
pub mod wallet;
