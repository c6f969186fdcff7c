//! One controller per dashboard page.
//!
//! A controller owns a [`ViewState`], a [`Lifecycle`], and a
//! [`ViewContext`]. `mount()` issues the page's initial fetch; actions go
//! through the `Submitting` phase and either patch the local data or re-fetch
//! it, depending on the context's [`SyncPolicy`](novito_config::SyncPolicy).

mod analytics;
mod audit;
mod blockers;
mod briefing;
mod chat;
mod dashboard;
mod meetings;
mod review;
mod settings;
mod smart;
mod tasks;
mod workload;

pub use analytics::{AnalyticsOverview, AnalyticsReport, AnalyticsSection};
pub use audit::{AuditFilter, AuditTrail};
pub use blockers::BlockerBoard;
pub use briefing::BriefingView;
pub use chat::{ChatMessage, ChatSession, Speaker};
pub use dashboard::DashboardController;
pub use meetings::MeetingsView;
pub use review::ReviewQueue;
pub use settings::SettingsView;
pub use smart::{SmartActionsView, SmartRun};
pub use tasks::{TaskBoard, TaskFilter};
pub use workload::{AssigneeLoad, WorkloadReport};

use std::future::Future;

use novito_gateway::GatewayError;

use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::ViewState;

/// Run a fetch and replace the view's data with its result.
pub(crate) async fn load<T, F>(
    lifecycle: &Lifecycle,
    state: &mut ViewState<T>,
    fetch: F,
) -> Result<(), ViewError>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    state.begin_load()?;
    let result = lifecycle.run(fetch).await?;
    state.finish_load(result)
}

/// Run a mutation. On failure the data is left untouched and one notice is
/// surfaced.
pub(crate) async fn submit<T, R, F>(
    lifecycle: &Lifecycle,
    state: &mut ViewState<T>,
    call: F,
) -> Result<R, ViewError>
where
    F: Future<Output = Result<R, GatewayError>>,
{
    state.begin_submit()?;
    match lifecycle.run(call).await? {
        Ok(value) => {
            state.finish_submit()?;
            Ok(value)
        }
        Err(err) => Err(state.fail(err.into())),
    }
}
