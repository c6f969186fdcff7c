use serde::Serialize;

use novito_core::enums::TaskStatus;
use novito_views::Page;
use novito_views::controllers::WorkloadReport;

use crate::cli::GlobalFlags;
use crate::commands::shared::loading;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct MemberRow {
    name: String,
    total: usize,
    completed: usize,
    blocked: usize,
}

#[derive(Serialize)]
struct StatusRow {
    status: TaskStatus,
    count: usize,
}

/// Handle `novito team`.
pub async fn team(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_page(Page::Team)?;
    let mut report = WorkloadReport::new(ctx.views());
    loading("Loading team workload", report.mount()).await?;

    let rows = report
        .by_assignee()
        .into_iter()
        .map(|load| MemberRow {
            name: load.name,
            total: load.total,
            completed: load.completed,
            blocked: load.blocked,
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

/// Handle `novito reports`.
pub async fn reports(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_page(Page::Reports)?;
    let mut report = WorkloadReport::new(ctx.views());
    loading("Loading reports", report.mount()).await?;

    let rows = report
        .by_status()
        .into_iter()
        .map(|(status, count)| StatusRow { status, count })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
