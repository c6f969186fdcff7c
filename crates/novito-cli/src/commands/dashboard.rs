use serde::Serialize;

use novito_views::Page;
use novito_views::controllers::DashboardController;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::loading;
use crate::commands::shared::rows::TaskRow;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct StatRow {
    label: &'static str,
    value: usize,
}

#[derive(Serialize)]
struct DashboardResponse {
    role: String,
    title: &'static str,
    features: &'static [&'static str],
    stats: Vec<StatRow>,
    tasks: Vec<TaskRow>,
    blocked: Vec<TaskRow>,
}

/// Handle `novito dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = ctx.require_page(Page::Dashboard)?;
    let mut dashboard = DashboardController::new(ctx.views(), view);
    loading("Loading dashboard", dashboard.mount()).await?;

    let content = &dashboard.role_view().content;
    let response = DashboardResponse {
        role: dashboard.role_view().role.to_string(),
        title: content.title,
        features: content.features,
        stats: dashboard
            .stats()
            .iter()
            .map(|stat| StatRow {
                label: stat.label(),
                value: stat.value,
            })
            .collect(),
        tasks: dashboard.my_tasks().iter().map(TaskRow::from).collect(),
        blocked: dashboard.blocked().into_iter().map(TaskRow::from).collect(),
    };

    if flags.format != OutputFormat::Table {
        return output(&response, flags.format);
    }

    println!("{}", response.title);
    if !response.features.is_empty() {
        println!("{}", response.features.join(" · "));
    }
    println!();
    output(&response.stats, flags.format)?;
    println!();
    output(&response.tasks, flags.format)?;
    if !response.blocked.is_empty() {
        println!("\nBlocked");
        output(&response.blocked, flags.format)?;
    }
    Ok(())
}
