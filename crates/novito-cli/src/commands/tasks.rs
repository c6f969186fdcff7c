use anyhow::Context;

use novito_views::Page;
use novito_views::controllers::{TaskBoard, TaskFilter};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::rows::TaskRow;
use crate::commands::shared::{loading, report_notice};
use crate::context::AppContext;
use crate::output::output;

/// Handle `novito tasks`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let view = ctx.require_page(Page::Tasks)?;
    let mut board = TaskBoard::new(ctx.views(), view.content.scope);
    loading("Loading tasks", board.mount()).await?;

    match action {
        TaskCommands::List { status } => {
            let filter: TaskFilter = status
                .parse()
                .with_context(|| format!("invalid --status '{status}'"))?;
            board.set_filter(filter);
        }
        TaskCommands::SetStatus { id, status } => {
            loading("Updating task", board.set_status(*id, *status)).await?;
        }
        TaskCommands::SetProgress { id, progress } => {
            loading("Updating task", board.set_progress(*id, *progress)).await?;
        }
        TaskCommands::Capture { text } => {
            let task = loading("Capturing task", board.capture(&text.join(" "))).await?;
            return output(&TaskRow::from(&task), flags.format);
        }
    }

    report_notice(board.state().notice(), flags);
    let rows = match action {
        TaskCommands::SetStatus { id, .. } | TaskCommands::SetProgress { id, .. } => board
            .visible()
            .into_iter()
            .filter(|task| task.id == *id)
            .map(TaskRow::from)
            .collect::<Vec<_>>(),
        _ => board.visible().into_iter().map(TaskRow::from).collect(),
    };
    output(&rows, flags.format)
}
