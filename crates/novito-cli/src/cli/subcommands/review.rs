use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// List pending suggestions.
    List,
    /// Apply a suggestion.
    Approve { id: i64 },
    /// Dismiss a suggestion.
    Reject { id: i64 },
    /// Ask the agent for new suggestions.
    Run,
}
