use std::path::PathBuf;

use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum MeetingCommands {
    /// Extract task candidates from a transcript.
    Process {
        #[arg(long)]
        title: String,
        /// Transcript file; `-` reads stdin.
        #[arg(long)]
        transcript: PathBuf,
        /// Meeting time as `YYYY-MM-DD HH:MM`; defaults to now.
        #[arg(long)]
        date: Option<String>,
    },
}
