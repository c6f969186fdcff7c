use novito_core::enums::SmartAction;
use novito_core::responses::SmartActionOutcome;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::{Notice, ViewState};

use super::submit;

#[derive(Debug, Clone, PartialEq)]
pub struct SmartRun {
    pub action: SmartAction,
    /// Suggestions the action created.
    pub count: u64,
    pub outcome: SmartActionOutcome,
}

/// One-shot analysis actions. Nothing is fetched on mount; each run's result
/// is kept for display.
pub struct SmartActionsView<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    state: ViewState<Vec<SmartRun>>,
}

impl<A: DashboardApi> SmartActionsView<A> {
    #[must_use]
    pub fn new(ctx: ViewContext<A>) -> Self {
        Self {
            ctx,
            lifecycle: Lifecycle::new(),
            state: ViewState::ready(Vec::new()),
        }
    }

    pub async fn run(&mut self, action: SmartAction) -> Result<SmartRun, ViewError> {
        let outcome = submit(
            &self.lifecycle,
            &mut self.state,
            self.ctx
                .api()
                .run_smart_action(action, self.ctx.workspace_id),
        )
        .await?;
        let count = outcome.count(action);
        self.state.set_notice(Notice::info(format!(
            "{}: {count} suggestion(s) created",
            action.title()
        )));

        let run = SmartRun {
            action,
            count,
            outcome,
        };
        if let Some(runs) = self.state.data_mut() {
            runs.push(run.clone());
        }
        Ok(run)
    }

    /// Runs in the order they completed.
    #[must_use]
    pub fn runs(&self) -> &[SmartRun] {
        self.state.data().map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<SmartRun>> {
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
