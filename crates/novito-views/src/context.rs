use std::sync::Arc;

use novito_config::{NovitoConfig, SyncPolicy};
use novito_gateway::DashboardApi;

/// Backend handle plus the workspace-wide settings every controller needs.
#[derive(Debug)]
pub struct ViewContext<A> {
    api: Arc<A>,
    pub workspace_id: i64,
    /// Recorded as the actor when approving or rejecting suggestions.
    pub actor_id: Option<i64>,
    /// Personalises the daily briefing.
    pub user_id: Option<i64>,
    pub sync_policy: SyncPolicy,
    pub audit_limit: u32,
}

impl<A> Clone for ViewContext<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            workspace_id: self.workspace_id,
            actor_id: self.actor_id,
            user_id: self.user_id,
            sync_policy: self.sync_policy,
            audit_limit: self.audit_limit,
        }
    }
}

impl<A: DashboardApi> ViewContext<A> {
    #[must_use]
    pub fn new(api: Arc<A>, workspace_id: i64) -> Self {
        let defaults = NovitoConfig::default();
        Self {
            api,
            workspace_id,
            actor_id: None,
            user_id: None,
            sync_policy: defaults.views.sync_policy,
            audit_limit: defaults.views.audit_limit,
        }
    }

    #[must_use]
    pub fn from_config(api: Arc<A>, config: &NovitoConfig) -> Self {
        Self {
            api,
            workspace_id: config.workspace.id,
            actor_id: config.workspace.actor_id,
            user_id: config.workspace.user_id,
            sync_policy: config.views.sync_policy,
            audit_limit: config.views.audit_limit,
        }
    }

    #[must_use]
    pub fn with_sync_policy(mut self, policy: SyncPolicy) -> Self {
        self.sync_policy = policy;
        self
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }
}
