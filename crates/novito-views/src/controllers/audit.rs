use std::collections::BTreeSet;

use novito_core::entities::AuditRecord;
use novito_core::responses::ActionAck;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::{Notice, ViewState};

use super::{load, submit};

/// Client-side filter over the fetched audit page. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditFilter {
    pub action_type: Option<String>,
    pub target_type: Option<String>,
}

impl AuditFilter {
    #[must_use]
    pub fn matches(&self, record: &AuditRecord) -> bool {
        self.action_type
            .as_deref()
            .is_none_or(|action| record.action_type == action)
            && self
                .target_type
                .as_deref()
                .is_none_or(|target| record.target_type == target)
    }
}

/// Recent actions with their before/after state, newest first.
pub struct AuditTrail<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    filter: AuditFilter,
    state: ViewState<Vec<AuditRecord>>,
}

impl<A: DashboardApi> AuditTrail<A> {
    #[must_use]
    pub fn new(ctx: ViewContext<A>) -> Self {
        Self {
            ctx,
            lifecycle: Lifecycle::new(),
            filter: AuditFilter::default(),
            state: ViewState::new(),
        }
    }

    pub async fn mount(&mut self) -> Result<(), ViewError> {
        load(
            &self.lifecycle,
            &mut self.state,
            self.ctx
                .api()
                .list_audits(self.ctx.workspace_id, self.ctx.audit_limit),
        )
        .await
    }

    pub fn set_filter(&mut self, filter: AuditFilter) {
        self.filter = filter;
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&AuditRecord> {
        self.state
            .data()
            .map(|records| records.iter().filter(|r| self.filter.matches(r)).collect())
            .unwrap_or_default()
    }

    /// Distinct action types in the fetched page, for building filters.
    #[must_use]
    pub fn action_types(&self) -> Vec<&str> {
        self.state
            .data()
            .map(|records| {
                records
                    .iter()
                    .map(|r| r.action_type.as_str())
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Restore the record's prior state on the server, then re-fetch.
    ///
    /// Records without a `before` snapshot are refused without a request.
    pub async fn undo(&mut self, audit_id: i64) -> Result<ActionAck, ViewError> {
        let record = self
            .state
            .data()
            .and_then(|records| records.iter().find(|r| r.id == audit_id))
            .ok_or(ViewError::NotInView {
                entity: "audit record",
                id: audit_id,
            })?;
        if !record.is_undoable() {
            return Err(ViewError::NotUndoable(audit_id));
        }

        let ack = submit(
            &self.lifecycle,
            &mut self.state,
            self.ctx.api().undo_audit(audit_id),
        )
        .await?;
        self.mount().await?;

        let message = ack.message.clone().unwrap_or_else(|| "Action undone".into());
        self.state.set_notice(if ack.success {
            Notice::info(message)
        } else {
            Notice::error(format!("Undo of audit record {audit_id} was not applied"))
        });
        Ok(ack)
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<AuditRecord>> {
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
