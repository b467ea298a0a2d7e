use super::stats::load_config;
use super::{analyse_source, ReportArgs};
use crate::errors::AppResult;
use crate::wallet::NoteSource;
use clap::Args;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

/// Shown when `parse` waits on a terminal rather than piped input
pub const INTERACTIVE_STDIN_HINT: &str =
    "Reading list-notes output from stdin (press Ctrl-D to finish, or pass --input <file>)";

#[derive(Args)]
pub struct ParseCommand {
    /// Saved list-notes output (reads stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    #[command(flatten)]
    report: ReportArgs,
}

impl ParseCommand {
    pub async fn run(&self) -> AppResult<()> {
        let app_config = load_config()?;
        let report_config = self.report.resolve(&app_config.report)?;

        let source = match &self.input {
            Some(path) => NoteSource::File(path.clone()),
            None => {
                info!("No --input given, reading stdin");
                if let Some(hint) = stdin_hint(std::io::stdin().is_terminal()) {
                    eprintln!("{}", hint);
                }
                NoteSource::Stdin
            }
        };
        analyse_source(&source, report_config, &self.report.output_format()).await
    }
}

fn stdin_hint(stdin_is_terminal: bool) -> Option<&'static str> {
    stdin_is_terminal.then_some(INTERACTIVE_STDIN_HINT)
}
