//! Flat row shapes for list output.

use novito_core::entities::{AuditRecord, Suggestion, Task};
use novito_core::enums::TaskStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub status: TaskStatus,
    pub assignee: Option<String>,
    pub progress: u8,
    pub blocked: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            status: task.status,
            assignee: task.assignee.clone(),
            progress: task.progress,
            blocked: task.is_blocked,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlockerRow {
    pub id: i64,
    pub title: String,
    pub assignee: Option<String>,
    pub reason: Option<String>,
}

impl From<&Task> for BlockerRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            assignee: task.assignee.clone(),
            reason: task.blocker_reason.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestionRow {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub confidence: String,
    pub summary: String,
}

impl From<&Suggestion> for SuggestionRow {
    fn from(suggestion: &Suggestion) -> Self {
        Self {
            id: suggestion.id,
            kind: suggestion.suggestion_type.to_string(),
            confidence: format!("{:.0}%", suggestion.confidence * 100.0),
            summary: suggestion.summary(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuditRow {
    pub id: i64,
    pub action: String,
    pub target: String,
    pub actor: String,
    pub undoable: bool,
    pub at: Option<String>,
}

impl From<&AuditRecord> for AuditRow {
    fn from(record: &AuditRecord) -> Self {
        let target = match record.target_id {
            Some(id) => format!("{} #{id}", record.target_type),
            None => record.target_type.clone(),
        };
        let actor = record
            .actor_id
            .map_or_else(|| "agent".to_string(), |id| format!("user #{id}"));
        Self {
            id: record.id,
            action: record.action_type.clone(),
            target,
            actor,
            undoable: record.is_undoable(),
            at: record
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}
