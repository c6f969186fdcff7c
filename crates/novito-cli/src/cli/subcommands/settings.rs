use clap::Subcommand;
use novito_core::enums::AgentMode;

use super::parse_mode;

#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show the workspace agent settings.
    Show,
    /// Change agent settings.
    Set {
        /// off, suggest or auto.
        #[arg(long, value_parser = parse_mode)]
        mode: Option<AgentMode>,
        /// Minimum confidence for automatic actions, in [0, 1].
        #[arg(long)]
        threshold: Option<f64>,
        /// Toggle an allowed auto action (set_focus_time, split_task, create_task).
        #[arg(long = "toggle")]
        toggle: Vec<String>,
    },
}
