//! Workspace and identity defaults sent with backend calls.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_workspace_id() -> i64 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Workspace every view is scoped to.
    #[serde(default = "default_workspace_id")]
    pub id: i64,

    /// Actor recorded in the audit trail when approving or rejecting
    /// suggestions.
    #[serde(default)]
    pub actor_id: Option<i64>,

    /// User the daily briefing is personalised for.
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            id: default_workspace_id(),
            actor_id: None,
            user_id: None,
        }
    }
}

impl WorkspaceConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.id <= 0 {
            return Err(ConfigError::invalid("workspace.id", "must be positive"));
        }
        if self.actor_id.is_some_and(|id| id <= 0) {
            return Err(ConfigError::invalid("workspace.actor_id", "must be positive"));
        }
        if self.user_id.is_some_and(|id| id <= 0) {
            return Err(ConfigError::invalid("workspace.user_id", "must be positive"));
        }
        Ok(())
    }
}
