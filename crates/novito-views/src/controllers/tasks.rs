use std::fmt;
use std::str::FromStr;

use novito_config::SyncPolicy;
use novito_core::CoreError;
use novito_core::entities::Task;
use novito_core::enums::TaskStatus;
use novito_core::requests::TaskUpdate;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::resolver::TaskScope;
use crate::state::{Notice, ViewState};

use super::{load, submit};

/// Client-side status filter of the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Status(TaskStatus),
}

impl TaskFilter {
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => task.status == status,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Status)
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Status(status) => fmt::Display::fmt(status, f),
        }
    }
}

/// Task list with status filtering and inline status/progress edits.
pub struct TaskBoard<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    scope: TaskScope,
    filter: TaskFilter,
    state: ViewState<Vec<Task>>,
}

impl<A: DashboardApi> TaskBoard<A> {
    /// `scope` limits which tasks are listed; non-admin roles see only their
    /// own assignments.
    #[must_use]
    pub fn new(ctx: ViewContext<A>, scope: TaskScope) -> Self {
        Self {
            ctx,
            lifecycle: Lifecycle::new(),
            scope,
            filter: TaskFilter::All,
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

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    #[must_use]
    pub const fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Tasks in scope that pass the current filter, in fetch order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Task> {
        self.state
            .data()
            .map(|tasks| {
                tasks
                    .iter()
                    .filter(|t| self.scope.includes(t) && self.filter.matches(t))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Move a task to `status`. Completing a task also sets progress to 100.
    pub async fn set_status(&mut self, task_id: i64, status: TaskStatus) -> Result<(), ViewError> {
        self.apply(task_id, TaskUpdate::status(status)).await
    }

    pub async fn set_progress(&mut self, task_id: i64, progress: u8) -> Result<(), ViewError> {
        self.apply(task_id, TaskUpdate::progress(progress)).await
    }

    /// Turn free text into a new task.
    pub async fn capture(&mut self, text: &str) -> Result<Task, ViewError> {
        let task = submit(
            &self.lifecycle,
            &mut self.state,
            self.ctx.api().capture_task(self.ctx.workspace_id, text),
        )
        .await?;
        match self.ctx.sync_policy {
            SyncPolicy::Optimistic => {
                if let Some(tasks) = self.state.data_mut() {
                    tasks.push(task.clone());
                }
            }
            SyncPolicy::Refetch => self.mount().await?,
        }
        Ok(task)
    }

    async fn apply(&mut self, task_id: i64, update: TaskUpdate) -> Result<(), ViewError> {
        if !self.contains(task_id) {
            return Err(ViewError::NotInView {
                entity: "task",
                id: task_id,
            });
        }
        update.validate()?;
        let updated = submit(
            &self.lifecycle,
            &mut self.state,
            self.ctx.api().update_task(task_id, &update),
        )
        .await?;
        match self.ctx.sync_policy {
            SyncPolicy::Optimistic => {
                if let Some(slot) = self
                    .state
                    .data_mut()
                    .and_then(|tasks| tasks.iter_mut().find(|t| t.id == task_id))
                {
                    *slot = updated;
                }
                Ok(())
            }
            SyncPolicy::Refetch => self.mount().await,
        }
    }

    /// Only tasks inside the board's scope can be edited.
    fn contains(&self, task_id: i64) -> bool {
        self.state.data().is_some_and(|tasks| {
            tasks
                .iter()
                .any(|t| t.id == task_id && self.scope.includes(t))
        })
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
