use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A backend audit-trail entry. Read-only on the client, except that entries
/// carrying a `before` snapshot can be undone.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditRecord {
    pub id: i64,
    pub workspace_id: Option<i64>,
    pub action_type: String,
    pub target_type: String,
    pub target_id: Option<i64>,
    pub actor_id: Option<i64>,
    pub suggestion_id: Option<i64>,
    pub before: Option<serde_json::Value>,
    pub after: Option<serde_json::Value>,
    pub created_at: Option<NaiveDateTime>,
}

impl AuditRecord {
    #[must_use]
    pub const fn is_undoable(&self) -> bool {
        self.before.is_some()
    }

    /// Whether the change was made by the agent rather than a person.
    #[must_use]
    pub const fn is_agent_action(&self) -> bool {
        self.actor_id.is_none()
    }
}
