use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::enums::{EffortTag, SuggestionType};

/// An AI-proposed action awaiting human approval or rejection.
///
/// `payload` varies by `suggestion_type`; use [`Suggestion::details`] for a
/// typed view of the known kinds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Suggestion {
    pub id: i64,
    pub workspace_id: Option<i64>,
    #[schemars(with = "String")]
    pub suggestion_type: SuggestionType,
    /// In `[0, 1]`.
    pub confidence: f64,
    #[serde(default)]
    pub payload: serde_json::Value,
    #[serde(default)]
    pub applied: bool,
    pub created_at: Option<NaiveDateTime>,
}

/// Payload of a `create_task` suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateTaskDetails {
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub priority: Option<u8>,
    pub effort_tag: Option<EffortTag>,
}

/// One piece of a `split_task` suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subtask {
    pub title: String,
    pub description: Option<String>,
}

/// Payload of a `split_task` suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SplitTaskDetails {
    pub task_id: Option<i64>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

/// Payload of a `set_focus_time` suggestion. `focus_time` is in hours.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FocusTimeDetails {
    pub task_id: i64,
    pub focus_time: u32,
}

/// Payload of a `flag_risk` suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RiskDetails {
    pub task_id: i64,
    pub reason: String,
    pub action: Option<String>,
}

/// Typed view over a suggestion's payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionDetails {
    CreateTask(CreateTaskDetails),
    SplitTask(SplitTaskDetails),
    SetFocusTime(FocusTimeDetails),
    FlagRisk(RiskDetails),
    /// Kinds without a typed payload, or payloads that did not match their kind.
    Raw(serde_json::Value),
}

impl Suggestion {
    /// Decode the payload according to `suggestion_type`.
    ///
    /// Payloads that do not match their declared kind are returned as
    /// [`SuggestionDetails::Raw`] rather than failing, since the payload is
    /// rendered, never acted on, by the client.
    #[must_use]
    pub fn details(&self) -> SuggestionDetails {
        let typed = match self.suggestion_type {
            SuggestionType::CreateTask => self.payload_as().map(SuggestionDetails::CreateTask),
            SuggestionType::SplitTask => self.payload_as().map(SuggestionDetails::SplitTask),
            SuggestionType::SetFocusTime => self.payload_as().map(SuggestionDetails::SetFocusTime),
            SuggestionType::FlagRisk => self.payload_as().map(SuggestionDetails::FlagRisk),
            _ => None,
        };
        typed.unwrap_or_else(|| SuggestionDetails::Raw(self.payload.clone()))
    }

    /// One-line human summary used by list renderers.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.details() {
            SuggestionDetails::CreateTask(task) => format!("Create task: {}", task.title),
            SuggestionDetails::SplitTask(split) => {
                format!("Split into {} subtasks", split.subtasks.len())
            }
            SuggestionDetails::SetFocusTime(focus) => {
                format!("Focus {}h on task #{}", focus.focus_time, focus.task_id)
            }
            SuggestionDetails::FlagRisk(risk) => {
                format!("Risk on task #{}: {}", risk.task_id, risk.reason)
            }
            SuggestionDetails::Raw(_) => self.suggestion_type.to_string(),
        }
    }

    fn payload_as<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.payload.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn suggestion(kind: &str, payload: serde_json::Value) -> Suggestion {
        serde_json::from_value(json!({
            "id": 1,
            "suggestion_type": kind,
            "confidence": 0.9,
            "payload": payload,
        }))
        .unwrap()
    }

    #[test]
    fn split_task_payload_is_typed() {
        let s = suggestion(
            "split_task",
            json!({"subtasks": [{"title": "Part 1"}, {"title": "Part 2", "description": "d"}]}),
        );
        match s.details() {
            SuggestionDetails::SplitTask(split) => assert_eq!(split.subtasks.len(), 2),
            other => panic!("unexpected details: {other:?}"),
        }
        assert_eq!(s.summary(), "Split into 2 subtasks");
    }

    #[test]
    fn mismatched_payload_falls_back_to_raw() {
        let s = suggestion("set_focus_time", json!({"hours": "four"}));
        assert!(matches!(s.details(), SuggestionDetails::Raw(_)));
    }

    #[test]
    fn unknown_kind_keeps_raw_payload() {
        let s = suggestion("merge_tasks", json!({"ids": [1, 2]}));
        assert_eq!(s.details(), SuggestionDetails::Raw(json!({"ids": [1, 2]})));
        assert_eq!(s.summary(), "merge_tasks");
    }
}
