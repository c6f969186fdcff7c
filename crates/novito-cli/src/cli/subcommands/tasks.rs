use clap::Subcommand;
use novito_core::enums::TaskStatus;

use super::parse_status;

#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks in the role's scope.
    List {
        /// `all` or a status (todo, in_progress, qa, done, released).
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// Move a task to a new status.
    SetStatus {
        id: i64,
        #[arg(value_parser = parse_status)]
        status: TaskStatus,
    },
    /// Set a task's progress percentage.
    SetProgress {
        id: i64,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        progress: u8,
    },
    /// Create a task from free text.
    Capture {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}
