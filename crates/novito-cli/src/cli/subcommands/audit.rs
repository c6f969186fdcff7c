use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// List recent actions.
    List {
        /// Only this action type.
        #[arg(long)]
        action: Option<String>,
        /// Only this target type.
        #[arg(long)]
        target: Option<String>,
    },
    /// Restore the state recorded before an action.
    Undo { id: i64 },
}
