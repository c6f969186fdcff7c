use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => commands::session::login(&args, ctx, flags).await,
        Commands::Logout => commands::session::logout(ctx, flags),
        Commands::Whoami => commands::session::whoami(ctx, flags),
        Commands::Nav => commands::session::nav(ctx, flags),
        Commands::Open(args) => commands::session::open(&args, ctx, flags),
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Tasks { action } => commands::tasks::handle(&action, ctx, flags).await,
        Commands::Review { action } => commands::review::handle(&action, ctx, flags).await,
        Commands::Blockers { action } => commands::blockers::handle(&action, ctx, flags).await,
        Commands::Audit { action } => commands::audit::handle(&action, ctx, flags).await,
        Commands::Analytics => commands::analytics::handle(ctx, flags).await,
        Commands::Briefing => commands::briefing::handle(ctx, flags).await,
        Commands::Chat(args) => commands::chat::handle(&args, ctx, flags).await,
        Commands::Smart(args) => commands::smart::handle(&args, ctx, flags).await,
        Commands::Settings { action } => commands::settings::handle(&action, ctx, flags).await,
        Commands::Meetings { action } => commands::meetings::handle(&action, ctx, flags).await,
        Commands::Team => commands::team::team(ctx, flags).await,
        Commands::Reports => commands::team::reports(ctx, flags).await,
    }
}
