use clap::{Args, Subcommand};
use novito_core::enums::{Role, SmartAction};

use crate::cli::subcommands::{
    AuditCommands, BlockerCommands, MeetingCommands, ReviewCommands, SettingsCommands,
    TaskCommands, parse_role, parse_smart_action,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Start a session, as a role or with credentials.
    Login(LoginArgs),
    /// End the session.
    Logout,
    /// Show the current session and its role.
    Whoami,
    /// List the pages available to the current role.
    Nav,
    /// Resolve a route for the current role.
    Open(OpenArgs),
    /// Role dashboard: title, shortcuts, statistics, blocked tasks.
    Dashboard,
    /// Task list and inline edits.
    Tasks {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// AI suggestions awaiting approval.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
    /// Blocked tasks.
    Blockers {
        #[command(subcommand)]
        action: BlockerCommands,
    },
    /// Audit trail of recent actions.
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Velocity, cycle time, workload and AI effectiveness.
    Analytics,
    /// Today's briefing.
    Briefing,
    /// Ask the workspace agent a question.
    Chat(ChatArgs),
    /// Run a one-shot analysis.
    Smart(SmartArgs),
    /// Workspace agent settings.
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Extract tasks from meeting transcripts.
    Meetings {
        #[command(subcommand)]
        action: MeetingCommands,
    },
    /// Workload per team member.
    Team,
    /// Task counts per status.
    Reports,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Role to log in as (admin, manager, product_owner, developer, qa, member).
    #[arg(value_parser = parse_role, required_unless_present = "username", conflicts_with = "username")]
    pub role: Option<Role>,
    /// Log in with credentials; the backend decides the role.
    #[arg(long, requires = "password")]
    pub username: Option<String>,
    #[arg(long, requires = "username")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Route path, e.g. /tasks or review.
    pub path: String,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// The question.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SmartArgs {
    /// detect-risks, suggest-rebalance, find-dependencies or auto-prioritize.
    #[arg(value_parser = parse_smart_action)]
    pub action: SmartAction,
}
