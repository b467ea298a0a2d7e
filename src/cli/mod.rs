use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Nockchain Mining Statistics Analyser
#[derive(Parser)]
#[command(name = "nock-mining-stats")]
#[command(about = "Rank nockchain miners by completed coinbase blocks")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging output (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Query the wallet over the node socket and rank miners
    Stats(commands::stats::StatsCommand),
    /// Rank miners from a saved list-notes dump (file or stdin)
    Parse(commands::parse::ParseCommand),
}

/// Initialise tracing on stderr so the report on stdout stays clean
///
/// Uses RUST_LOG (defaults to "error" if not set); `--debug` forces "debug".
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::Stats(command) => command.run().await,
        Commands::Parse(command) => command.run().await,
    }
}
