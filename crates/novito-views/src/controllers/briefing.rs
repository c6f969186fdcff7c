use novito_core::responses::BriefingSnapshot;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::{Notice, ViewState};

use super::load;

/// Today's briefing, personalised when a user id is configured.
pub struct BriefingView<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    state: ViewState<BriefingSnapshot>,
}

impl<A: DashboardApi> BriefingView<A> {
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
            self.ctx
                .api()
                .daily_briefing(self.ctx.workspace_id, self.ctx.user_id),
        )
        .await
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<BriefingSnapshot> {
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
