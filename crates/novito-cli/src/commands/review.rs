use serde::Serialize;

use novito_views::Page;
use novito_views::controllers::ReviewQueue;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewCommands;
use crate::commands::shared::rows::SuggestionRow;
use crate::commands::shared::{loading, report_notice};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DecisionResponse {
    id: i64,
    decision: &'static str,
    remaining: usize,
}

/// Handle `novito review`.
pub async fn handle(
    action: &ReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_page(Page::Review)?;
    let mut queue = ReviewQueue::new(ctx.views());
    loading("Loading review queue", queue.mount()).await?;

    let decision = match action {
        ReviewCommands::List => None,
        ReviewCommands::Approve { id } => {
            loading("Approving", queue.approve(*id)).await?;
            Some((*id, "approved"))
        }
        ReviewCommands::Reject { id } => {
            loading("Rejecting", queue.reject(*id)).await?;
            Some((*id, "rejected"))
        }
        ReviewCommands::Run => {
            loading("Running suggestion engine", queue.run_engine()).await?;
            None
        }
    };

    report_notice(queue.state().notice(), flags);
    match decision {
        Some((id, decision)) => output(
            &DecisionResponse {
                id,
                decision,
                remaining: queue.pending().len(),
            },
            flags.format,
        ),
        None => {
            let rows = queue.pending().iter().map(SuggestionRow::from).collect::<Vec<_>>();
            output(&rows, flags.format)
        }
    }
}
