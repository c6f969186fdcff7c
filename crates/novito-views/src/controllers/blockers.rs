use novito_config::SyncPolicy;
use novito_core::entities::Task;
use novito_core::requests::TaskUpdate;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::{Notice, ViewState};

use super::{load, submit};

/// Blocked tasks and their reasons.
pub struct BlockerBoard<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    state: ViewState<Vec<Task>>,
}

impl<A: DashboardApi> BlockerBoard<A> {
    #[must_use]
    pub fn new(ctx: ViewContext<A>) -> Self {
        Self {
            ctx,
            lifecycle: Lifecycle::new(),
            state: ViewState::new(),
        }
    }

    pub async fn mount(&mut self) -> Result<(), ViewError> {
        load(
            &self.lifecycle,
            &mut self.state,
            self.ctx.api().list_blockers(self.ctx.workspace_id),
        )
        .await
    }

    #[must_use]
    pub fn blockers(&self) -> &[Task] {
        self.state.data().map_or(&[][..], Vec::as_slice)
    }

    /// Clear the blocked flag and reason, then drop the task from the board.
    pub async fn resolve(&mut self, task_id: i64) -> Result<(), ViewError> {
        if !self.blockers().iter().any(|t| t.id == task_id) {
            return Err(ViewError::NotInView {
                entity: "blocked task",
                id: task_id,
            });
        }
        let update = TaskUpdate::unblock();
        submit(
            &self.lifecycle,
            &mut self.state,
            self.ctx.api().update_task(task_id, &update),
        )
        .await?;

        match self.ctx.sync_policy {
            SyncPolicy::Optimistic => {
                if let Some(blockers) = self.state.data_mut() {
                    blockers.retain(|t| t.id != task_id);
                }
                Ok(())
            }
            SyncPolicy::Refetch => self.mount().await,
        }
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

    #[must_use]
    pub const fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}
