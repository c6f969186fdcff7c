use novito_core::entities::Workspace;
use novito_core::enums::AgentMode;
use novito_core::requests::AgentModeUpdate;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::{Notice, ViewState};

use super::{load, submit};

/// Suggestion types the agent can be allowed to apply on its own.
pub const AUTO_ACTIONS: [&str; 3] = ["set_focus_time", "split_task", "create_task"];

/// Workspace agent settings with an editable draft.
pub struct SettingsView<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    state: ViewState<Workspace>,
    draft: Option<AgentModeUpdate>,
}

impl<A: DashboardApi> SettingsView<A> {
    #[must_use]
    pub fn new(ctx: ViewContext<A>) -> Self {
        Self {
            ctx,
            lifecycle: Lifecycle::new(),
            state: ViewState::new(),
            draft: None,
        }
    }

    pub async fn mount(&mut self) -> Result<(), ViewError> {
        load(
            &self.lifecycle,
            &mut self.state,
            self.ctx.api().get_workspace(self.ctx.workspace_id),
        )
        .await?;
        self.reset_draft();
        Ok(())
    }

    /// The unsaved edits, seeded from the loaded workspace.
    #[must_use]
    pub const fn draft(&self) -> Option<&AgentModeUpdate> {
        self.draft.as_ref()
    }

    /// Discard unsaved edits.
    pub fn reset_draft(&mut self) {
        self.draft = self.state.data().map(|ws| AgentModeUpdate {
            agent_mode: ws.agent_mode,
            agent_config: ws.agent_config.clone(),
        });
    }

    pub fn set_mode(&mut self, mode: AgentMode) {
        if let Some(draft) = &mut self.draft {
            draft.agent_mode = mode;
        }
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        if let Some(draft) = &mut self.draft {
            draft.agent_config.auto_confidence_threshold = threshold;
        }
    }

    /// Add or remove `action` from the allowed auto actions. Returns whether
    /// it is allowed afterwards.
    pub fn toggle_action(&mut self, action: &str) -> bool {
        let Some(draft) = &mut self.draft else {
            return false;
        };
        let allowed = &mut draft.agent_config.allowed_auto_actions;
        if let Some(pos) = allowed.iter().position(|a| a == action) {
            allowed.remove(pos);
            false
        } else {
            allowed.push(action.to_string());
            true
        }
    }

    /// Persist the draft. An out-of-range threshold is refused locally.
    pub async fn save(&mut self) -> Result<(), ViewError> {
        let Some(update) = self.draft.clone() else {
            return Err(ViewError::NotInView {
                entity: "workspace",
                id: self.ctx.workspace_id,
            });
        };
        update.validate()?;

        let workspace = submit(
            &self.lifecycle,
            &mut self.state,
            self.ctx
                .api()
                .update_agent_mode(self.ctx.workspace_id, &update),
        )
        .await?;
        tracing::info!(
            workspace_id = workspace.id,
            mode = %workspace.agent_mode,
            "agent settings saved"
        );
        self.state.set_data(workspace);
        self.reset_draft();
        self.state.set_notice(Notice::info("Settings saved"));
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<Workspace> {
        &self.state
    }

    /// Acknowledge the pending notice. A failed view keeps its data and
    /// accepts actions again.
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.state.dismiss_notice()
    }

    #[must_use]
    pub const fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}
