use serde::Serialize;
use serde_json::Value;

use novito_views::Page;
use novito_views::controllers::AnalyticsOverview;

use crate::cli::GlobalFlags;
use crate::commands::shared::loading;
use crate::context::AppContext;
use crate::output::{notice, output};

#[derive(Serialize)]
struct SectionRow<'a> {
    section: &'static str,
    data: &'a Value,
}

/// Handle `novito analytics`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_page(Page::Analytics)?;
    let mut overview = AnalyticsOverview::new(ctx.views());
    loading("Loading analytics", overview.mount()).await?;

    let Some(report) = overview.state().data() else {
        return Ok(());
    };
    for kind in &report.omitted {
        notice(&format!("{} is unavailable", kind.title()), flags);
    }
    let rows = report
        .sections
        .iter()
        .map(|section| SectionRow {
            section: section.kind.title(),
            data: section.snapshot.data(),
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
