use serde::Serialize;

use novito_core::entities::Workspace;
use novito_views::Page;
use novito_views::controllers::SettingsView;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SettingsCommands;
use crate::commands::shared::{loading, report_notice};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SettingsResponse {
    workspace_id: i64,
    name: String,
    agent_mode: String,
    auto_confidence_threshold: f64,
    allowed_auto_actions: Vec<String>,
}

impl From<&Workspace> for SettingsResponse {
    fn from(workspace: &Workspace) -> Self {
        Self {
            workspace_id: workspace.id,
            name: workspace.name.clone(),
            agent_mode: workspace.agent_mode.to_string(),
            auto_confidence_threshold: workspace.agent_config.auto_confidence_threshold,
            allowed_auto_actions: workspace.agent_config.allowed_auto_actions.clone(),
        }
    }
}

/// Handle `novito settings`.
pub async fn handle(
    action: &SettingsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_page(Page::Settings)?;
    let mut settings = SettingsView::new(ctx.views());
    loading("Loading settings", settings.mount()).await?;

    if let SettingsCommands::Set {
        mode,
        threshold,
        toggle,
    } = action
    {
        if let Some(mode) = mode {
            settings.set_mode(*mode);
        }
        if let Some(threshold) = threshold {
            settings.set_threshold(*threshold);
        }
        for name in toggle {
            settings.toggle_action(name);
        }
        loading("Saving settings", settings.save()).await?;
        report_notice(settings.state().notice(), flags);
    }

    match settings.state().data() {
        Some(workspace) => output(&SettingsResponse::from(workspace), flags.format),
        None => Ok(()),
    }
}
