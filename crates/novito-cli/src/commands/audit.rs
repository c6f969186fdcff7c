use novito_views::Page;
use novito_views::controllers::{AuditFilter, AuditTrail};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::commands::shared::rows::AuditRow;
use crate::commands::shared::{loading, report_notice};
use crate::context::AppContext;
use crate::output::output;

/// Handle `novito audit`.
pub async fn handle(
    action: &AuditCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_page(Page::Audit)?;
    let mut trail = AuditTrail::new(ctx.views());
    loading("Loading audit trail", trail.mount()).await?;

    match action {
        AuditCommands::List { action, target } => trail.set_filter(AuditFilter {
            action_type: action.clone(),
            target_type: target.clone(),
        }),
        AuditCommands::Undo { id } => {
            loading("Undoing", trail.undo(*id)).await?;
            report_notice(trail.state().notice(), flags);
        }
    }

    let rows = trail.visible().into_iter().map(AuditRow::from).collect::<Vec<_>>();
    output(&rows, flags.format)
}
