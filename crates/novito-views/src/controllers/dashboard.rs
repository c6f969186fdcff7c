use novito_core::entities::Task;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::resolver::{RoleView, Stat};
use crate::state::{Notice, ViewState};

use super::load;

/// Landing page: role title, feature shortcuts, stats over the role's tasks,
/// and the workspace's blocked tasks.
pub struct DashboardController<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    view: RoleView,
    state: ViewState<Vec<Task>>,
}

impl<A: DashboardApi> DashboardController<A> {
    #[must_use]
    pub fn new(ctx: ViewContext<A>, view: RoleView) -> Self {
        Self {
            ctx,
            lifecycle: Lifecycle::new(),
            view,
            state: ViewState::new(),
        }
    }

    pub async fn mount(&mut self) -> Result<(), ViewError> {
        load(
            &self.lifecycle,
            &mut self.state,
            self.ctx.api().list_tasks(self.ctx.workspace_id, None),
        )
        .await
    }

    #[must_use]
    pub const fn role_view(&self) -> &RoleView {
        &self.view
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<Task>> {
        &self.state
    }

    /// Acknowledge the pending notice. A failed view keeps its data and
    /// accepts actions again.
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.state.dismiss_notice()
    }

    /// Tasks in the role's scope.
    #[must_use]
    pub fn my_tasks(&self) -> Vec<Task> {
        self.state
            .data()
            .map(|tasks| self.view.content.select(tasks))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn stats(&self) -> Vec<Stat> {
        self.view
            .content
            .stats_for(self.state.data().map_or(&[][..], Vec::as_slice))
    }

    /// Blocked tasks across the whole workspace.
    #[must_use]
    pub fn blocked(&self) -> Vec<&Task> {
        self.state
            .data()
            .map(|tasks| tasks.iter().filter(|t| t.is_blocked).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}
