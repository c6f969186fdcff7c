//! Response payloads that are not first-class entities.
//!
//! Analytics, briefing and smart-action responses are presentation data whose
//! shape the backend owns; they are kept as JSON with a few typed accessors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::SmartAction;

/// User record returned by credential login.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: Option<UserProfile>,
}

impl LoginResponse {
    /// The string stored as the session token: the reported role, or the
    /// raw token when the backend sent no user record.
    #[must_use]
    pub fn session_role(&self) -> &str {
        self.user
            .as_ref()
            .map_or(self.token.as_str(), |user| user.role.as_str())
    }
}

/// Generic `{success, message}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionAck {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestionRun {
    pub success: bool,
    pub suggestions_created: u32,
}

/// One analytics section. The backend reports per-section failures inline as
/// an `error` field with a success status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AnalyticsSnapshot(pub Value);

impl AnalyticsSnapshot {
    /// Inline error message, if the section failed server-side.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.0.get("error").and_then(Value::as_str)
    }

    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.0
    }
}

/// Daily briefing as produced by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct BriefingSnapshot(pub Value);

impl BriefingSnapshot {
    /// One-line narrative the backend generates for the day.
    #[must_use]
    pub fn insight(&self) -> Option<&str> {
        self.0.get("ai_insight").and_then(Value::as_str)
    }

    /// A headline counter from the `summary` block, e.g. `blocked_count`.
    #[must_use]
    pub fn summary_count(&self, key: &str) -> Option<u64> {
        self.0.get("summary")?.get(key)?.as_u64()
    }

    /// Items of a named section such as `overdue_tasks` or `quick_wins`.
    #[must_use]
    pub fn section(&self, key: &str) -> &[Value] {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.0
    }
}

/// Answer from the chat endpoint. `kind` is the backend's tone hint
/// (`success`, `alert`, `warning`, `help`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
    #[serde(rename = "type", default = "default_reply_kind")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

fn default_reply_kind() -> String {
    "info".to_string()
}

/// Result of a smart action run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SmartActionOutcome(pub Value);

impl SmartActionOutcome {
    /// Number of suggestions the action created, read from the action's
    /// count field.
    #[must_use]
    pub fn count(&self, action: SmartAction) -> u64 {
        self.0
            .get(action.count_field())
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }

    #[must_use]
    pub fn suggestion_ids(&self) -> Vec<i64> {
        self.0
            .get("suggestion_ids")
            .and_then(Value::as_array)
            .map(|ids| ids.iter().filter_map(Value::as_i64).collect())
            .unwrap_or_default()
    }
}

/// Task extracted from a meeting transcript, stored server-side as a
/// `create_task` suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TaskCandidate {
    pub description: String,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<u8>,
    pub effort_tag: Option<String>,
    pub confidence: f64,
    #[serde(default)]
    pub is_blocked: bool,
    pub blocker_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MeetingOutcome {
    pub meeting_id: i64,
    #[serde(default)]
    pub candidates: Vec<TaskCandidate>,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_prefers_reported_role() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "demo-token-3",
            "user": {"id": 3, "username": "dev1", "display_name": "Dev One", "role": "developer"}
        }))
        .unwrap();
        assert_eq!(response.session_role(), "developer");

        let bare: LoginResponse =
            serde_json::from_value(json!({"token": "manager", "user": null})).unwrap();
        assert_eq!(bare.session_role(), "manager");
    }

    #[test]
    fn analytics_inline_error_is_detected() {
        let failed = AnalyticsSnapshot(json!({"error": "not enough data"}));
        assert_eq!(failed.error(), Some("not enough data"));
        assert_eq!(AnalyticsSnapshot(json!({"weeks": []})).error(), None);
    }

    #[test]
    fn briefing_accessors_read_nested_summary() {
        let briefing = BriefingSnapshot(json!({
            "summary": {"blocked_count": 2, "overdue_count": 0},
            "quick_wins": [{"id": 4, "title": "Fix typo"}],
            "ai_insight": "Two blockers need attention."
        }));
        assert_eq!(briefing.summary_count("blocked_count"), Some(2));
        assert_eq!(briefing.summary_count("missing"), None);
        assert_eq!(briefing.section("quick_wins").len(), 1);
        assert!(briefing.section("overdue_tasks").is_empty());
        assert_eq!(briefing.insight(), Some("Two blockers need attention."));
    }

    #[test]
    fn smart_outcome_reads_action_count() {
        let outcome = SmartActionOutcome(json!({"risks_detected": 2, "suggestion_ids": [7, 8]}));
        assert_eq!(outcome.count(SmartAction::DetectRisks), 2);
        assert_eq!(outcome.count(SmartAction::AutoPrioritize), 0);
        assert_eq!(outcome.suggestion_ids(), vec![7, 8]);
    }

    #[test]
    fn chat_reply_defaults_missing_fields() {
        let reply: ChatReply = serde_json::from_value(json!({"response": "hi"})).unwrap();
        assert_eq!(reply.kind, "info");
        assert!(reply.data.is_null());
    }
}
