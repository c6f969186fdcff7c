use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum BlockerCommands {
    /// List blocked tasks.
    List,
    /// Clear a task's blocked flag and reason.
    Resolve { id: i64 },
}
