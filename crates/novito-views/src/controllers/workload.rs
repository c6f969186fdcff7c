use std::collections::BTreeMap;

use novito_core::entities::Task;
use novito_core::enums::TaskStatus;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::{Notice, ViewState};

use super::load;

const UNASSIGNED: &str = "Unassigned";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeLoad {
    pub name: String,
    pub total: usize,
    pub completed: usize,
    pub blocked: usize,
}

/// Team workload and status breakdown, derived from the workspace's tasks.
pub struct WorkloadReport<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    state: ViewState<Vec<Task>>,
}

impl<A: DashboardApi> WorkloadReport<A> {
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
            self.ctx.api().list_tasks(self.ctx.workspace_id, None),
        )
        .await
    }

    /// Task count per status, in lifecycle order. Statuses with no tasks
    /// are reported as zero.
    #[must_use]
    pub fn by_status(&self) -> Vec<(TaskStatus, usize)> {
        let tasks = self.state.data().map_or(&[][..], Vec::as_slice);
        TaskStatus::ALL
            .iter()
            .map(|&status| (status, tasks.iter().filter(|t| t.status == status).count()))
            .collect()
    }

    /// Per-assignee load, sorted by name.
    #[must_use]
    pub fn by_assignee(&self) -> Vec<AssigneeLoad> {
        let mut loads: BTreeMap<&str, AssigneeLoad> = BTreeMap::new();
        for task in self.state.data().into_iter().flatten() {
            let name = task.assignee.as_deref().unwrap_or(UNASSIGNED);
            let entry = loads.entry(name).or_insert_with(|| AssigneeLoad {
                name: name.to_string(),
                total: 0,
                completed: 0,
                blocked: 0,
            });
            entry.total += 1;
            if task.status.is_complete() {
                entry.completed += 1;
            }
            if task.is_blocked {
                entry.blocked += 1;
            }
        }
        loads.into_values().collect()
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
