use novito_views::Page;
use novito_views::controllers::BriefingView;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::loading;
use crate::context::AppContext;
use crate::output::output;

/// Handle `novito briefing`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_page(Page::Briefing)?;
    let mut briefing = BriefingView::new(ctx.views());
    loading("Loading briefing", briefing.mount()).await?;

    let Some(snapshot) = briefing.state().data() else {
        return Ok(());
    };
    if flags.format == OutputFormat::Table
        && let Some(insight) = snapshot.insight()
    {
        println!("{insight}\n");
    }
    output(snapshot.data(), flags.format)
}
