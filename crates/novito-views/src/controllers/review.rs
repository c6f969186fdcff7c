use novito_config::SyncPolicy;
use novito_core::entities::Suggestion;
use novito_core::responses::SuggestionRun;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::{Notice, ViewState};

use super::{load, submit};

#[derive(Debug, Clone, Copy)]
enum Decision {
    Approve,
    Reject,
}

/// Pending AI suggestions awaiting approval.
pub struct ReviewQueue<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    state: ViewState<Vec<Suggestion>>,
}

impl<A: DashboardApi> ReviewQueue<A> {
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
            self.ctx.api().list_suggestions(self.ctx.workspace_id),
        )
        .await
    }

    #[must_use]
    pub fn pending(&self) -> &[Suggestion] {
        self.state.data().map_or(&[][..], Vec::as_slice)
    }

    /// Apply the suggestion, then drop it from the queue.
    pub async fn approve(&mut self, suggestion_id: i64) -> Result<(), ViewError> {
        self.decide(suggestion_id, Decision::Approve).await
    }

    /// Dismiss the suggestion, then drop it from the queue.
    pub async fn reject(&mut self, suggestion_id: i64) -> Result<(), ViewError> {
        self.decide(suggestion_id, Decision::Reject).await
    }

    /// Ask the backend to generate new suggestions, then re-fetch the queue.
    pub async fn run_engine(&mut self) -> Result<SuggestionRun, ViewError> {
        let run = submit(
            &self.lifecycle,
            &mut self.state,
            self.ctx.api().run_suggestions(self.ctx.workspace_id),
        )
        .await?;
        self.mount().await?;
        self.state.set_notice(Notice::info(format!(
            "Suggestion engine created {} suggestion(s)",
            run.suggestions_created
        )));
        Ok(run)
    }

    async fn decide(&mut self, suggestion_id: i64, decision: Decision) -> Result<(), ViewError> {
        if !self.pending().iter().any(|s| s.id == suggestion_id) {
            return Err(ViewError::NotInView {
                entity: "suggestion",
                id: suggestion_id,
            });
        }
        let api = self.ctx.api();
        let actor = self.ctx.actor_id;
        match decision {
            Decision::Approve => {
                submit(
                    &self.lifecycle,
                    &mut self.state,
                    api.apply_suggestion(suggestion_id, actor),
                )
                .await?;
            }
            Decision::Reject => {
                submit(
                    &self.lifecycle,
                    &mut self.state,
                    api.reject_suggestion(suggestion_id, actor),
                )
                .await?;
            }
        }
        tracing::debug!(suggestion_id, ?decision, "suggestion decided");

        match self.ctx.sync_policy {
            SyncPolicy::Optimistic => {
                if let Some(pending) = self.state.data_mut() {
                    pending.retain(|s| s.id != suggestion_id);
                }
                Ok(())
            }
            SyncPolicy::Refetch => self.mount().await,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<Suggestion>> {
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
