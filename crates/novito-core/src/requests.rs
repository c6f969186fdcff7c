//! Mutation payloads accepted by the backend.
//!
//! Each payload carries a `validate()` that rejects inputs the backend would
//! refuse, so the gateway can fail before issuing a request.

use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AgentConfig;
use crate::enums::{AgentMode, TaskStatus};
use crate::errors::CoreError;

/// Partial task update for `PATCH /tasks/{id}`.
///
/// `blocker_reason` is doubly optional: `None` leaves it untouched,
/// `Some(None)` clears it on the server (serialized as `null`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "double_option"
    )]
    #[schemars(with = "Option<String>")]
    pub blocker_reason: Option<Option<String>>,
}

impl TaskUpdate {
    /// Move a task to `status`. Completing a task also reports full progress.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            progress: (status == TaskStatus::Done).then_some(100),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn progress(progress: u8) -> Self {
        Self {
            progress: Some(progress),
            ..Self::default()
        }
    }

    /// Clear the blocked flag and the blocker reason.
    #[must_use]
    pub fn unblock() -> Self {
        Self {
            is_blocked: Some(false),
            blocker_reason: Some(None),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.progress.is_none()
            && self.is_blocked.is_none()
            && self.blocker_reason.is_none()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_empty() {
            return Err(CoreError::Validation(
                "task update must change at least one field".into(),
            ));
        }
        if let Some(progress) = self.progress
            && progress > 100
        {
            return Err(CoreError::Validation(format!(
                "progress must be between 0 and 100, got {progress}"
            )));
        }
        Ok(())
    }
}

/// Body for `PATCH /workspaces/{id}/agent-mode`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AgentModeUpdate {
    pub agent_mode: AgentMode,
    pub agent_config: AgentConfig,
}

impl AgentModeUpdate {
    pub fn validate(&self) -> Result<(), CoreError> {
        let threshold = self.agent_config.auto_confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CoreError::Validation(format!(
                "confidence threshold must be within [0, 1], got {threshold}"
            )));
        }
        Ok(())
    }
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(CoreError::Validation(
                "username and password are required".into(),
            ));
        }
        Ok(())
    }
}

/// Body for `POST /tasks/capture`: free text the backend turns into a task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaptureRequest {
    pub workspace_id: i64,
    pub text: String,
}

/// Body for `POST /meetings/process`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MeetingRequest {
    pub workspace_id: i64,
    pub title: String,
    pub meeting_date: NaiveDateTime,
    pub transcript: String,
}

impl MeetingRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() || self.transcript.trim().is_empty() {
            return Err(CoreError::Validation(
                "meeting title and transcript are required".into(),
            ));
        }
        Ok(())
    }
}

/// Serde adapter that keeps an explicit `null` distinct from an absent field.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S, T>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn unblock_serializes_explicit_null_reason() {
        let body = serde_json::to_value(TaskUpdate::unblock()).unwrap();
        assert_eq!(body, json!({"is_blocked": false, "blocker_reason": null}));
    }

    #[test]
    fn completing_reports_full_progress() {
        let body = serde_json::to_value(TaskUpdate::status(TaskStatus::Done)).unwrap();
        assert_eq!(body, json!({"status": "done", "progress": 100}));

        let body = serde_json::to_value(TaskUpdate::status(TaskStatus::Qa)).unwrap();
        assert_eq!(body, json!({"status": "qa"}));
    }

    #[test]
    fn empty_update_is_rejected() {
        assert!(TaskUpdate::default().validate().is_err());
    }

    #[test]
    fn progress_over_100_is_rejected() {
        let err = TaskUpdate::progress(120).validate().unwrap_err();
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn absent_reason_deserializes_as_untouched() {
        let update: TaskUpdate = serde_json::from_str(r#"{"is_blocked": true}"#).unwrap();
        assert_eq!(update.blocker_reason, None);

        let update: TaskUpdate = serde_json::from_str(r#"{"blocker_reason": null}"#).unwrap();
        assert_eq!(update.blocker_reason, Some(None));
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        let update = AgentModeUpdate {
            agent_mode: AgentMode::Auto,
            agent_config: AgentConfig {
                auto_confidence_threshold: 1.5,
                allowed_auto_actions: vec![],
            },
        };
        assert!(update.validate().is_err());
    }
}
