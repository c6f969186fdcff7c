use novito_core::enums::AnalyticsKind;
use novito_core::responses::AnalyticsSnapshot;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::{Notice, ViewState};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSection {
    pub kind: AnalyticsKind,
    pub snapshot: AnalyticsSnapshot,
}

/// The sections that rendered, plus those the backend reported as failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsReport {
    pub sections: Vec<AnalyticsSection>,
    pub omitted: Vec<AnalyticsKind>,
}

/// Four analytics sections loaded in parallel.
pub struct AnalyticsOverview<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    state: ViewState<AnalyticsReport>,
}

impl<A: DashboardApi> AnalyticsOverview<A> {
    #[must_use]
    pub fn new(ctx: ViewContext<A>) -> Self {
        Self {
            ctx,
            lifecycle: Lifecycle::new(),
            state: ViewState::new(),
        }
    }

    /// Fetch all sections concurrently.
    ///
    /// A transport, status, or decode failure in any section fails the
    /// whole mount with the first error. A section whose body carries an
    /// `error` field is omitted and the rest still render.
    pub async fn mount(&mut self) -> Result<(), ViewError> {
        self.state.begin_load()?;
        let api = self.ctx.api();
        let workspace_id = self.ctx.workspace_id;
        let [velocity, cycle, workload, ai] = AnalyticsKind::ALL;

        let results = self
            .lifecycle
            .run(async {
                let (a, b, c, d) = tokio::join!(
                    api.fetch_analytics(velocity, workspace_id),
                    api.fetch_analytics(cycle, workspace_id),
                    api.fetch_analytics(workload, workspace_id),
                    api.fetch_analytics(ai, workspace_id),
                );
                [(velocity, a), (cycle, b), (workload, c), (ai, d)]
            })
            .await?;

        let mut report = AnalyticsReport::default();
        let mut first_error = None;
        for (kind, result) in results {
            match result {
                Ok(snapshot) => {
                    if let Some(reason) = snapshot.error() {
                        tracing::warn!(section = %kind, reason, "analytics section unavailable");
                        report.omitted.push(kind);
                    } else {
                        report.sections.push(AnalyticsSection { kind, snapshot });
                    }
                }
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            Some(err) => self.state.finish_load(Err(err)),
            None => self.state.finish_load(Ok(report)),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<AnalyticsReport> {
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
