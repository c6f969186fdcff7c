use novito_views::Page;
use novito_views::controllers::BlockerBoard;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BlockerCommands;
use crate::commands::shared::loading;
use crate::commands::shared::rows::BlockerRow;
use crate::context::AppContext;
use crate::output::{notice, output};

/// Handle `novito blockers`.
pub async fn handle(
    action: &BlockerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_page(Page::Blockers)?;
    let mut board = BlockerBoard::new(ctx.views());
    loading("Loading blockers", board.mount()).await?;

    if let BlockerCommands::Resolve { id } = action {
        loading("Resolving blocker", board.resolve(*id)).await?;
        notice(&format!("Task {id} unblocked"), flags);
    }

    let rows = board.blockers().iter().map(BlockerRow::from).collect::<Vec<_>>();
    output(&rows, flags.format)
}
