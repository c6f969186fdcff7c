use serde::Serialize;

use novito_views::Page;
use novito_views::controllers::SmartActionsView;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SmartArgs;
use crate::commands::shared::{loading, report_notice};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SmartResponse {
    action: &'static str,
    suggestions_created: u64,
    suggestion_ids: Vec<i64>,
}

/// Handle `novito smart`.
pub async fn handle(args: &SmartArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_page(Page::SmartActions)?;
    let mut smart = SmartActionsView::new(ctx.views());
    let run = loading(args.action.title(), smart.run(args.action)).await?;

    report_notice(smart.state().notice(), flags);
    output(
        &SmartResponse {
            action: run.action.title(),
            suggestions_created: run.count,
            suggestion_ids: run.outcome.suggestion_ids(),
        },
        flags.format,
    )
}
