use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EffortTag, TaskStatus};

/// A unit of work tracked by the backend.
///
/// `progress == 100` implies `status == done` by UI convention only; the
/// backend does not enforce it (see [`Task::progress_consistent`]).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Task {
    pub id: i64,
    pub workspace_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Display name of the assignee, when the backend resolves one.
    pub assignee: Option<String>,
    pub assignee_id: Option<i64>,
    /// Ordinal urgency; higher is more urgent.
    pub priority: Option<u8>,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub is_blocked: bool,
    pub blocker_reason: Option<String>,
    pub effort_tag: Option<EffortTag>,
    pub due_date: Option<NaiveDateTime>,
    pub confidence: Option<f64>,
}

impl Task {
    /// A task with only the required fields set.
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            workspace_id: None,
            title: title.into(),
            description: None,
            status,
            assignee: None,
            assignee_id: None,
            priority: None,
            progress: 0,
            is_blocked: false,
            blocker_reason: None,
            effort_tag: None,
            due_date: None,
            confidence: None,
        }
    }

    /// Whether the task is assigned to `name` (case-insensitive).
    #[must_use]
    pub fn is_assigned_to(&self, name: &str) -> bool {
        self.assignee
            .as_deref()
            .is_some_and(|assignee| assignee.eq_ignore_ascii_case(name))
    }

    /// `false` when the task claims full progress without being complete.
    #[must_use]
    pub const fn progress_consistent(&self) -> bool {
        self.progress < 100 || self.status.is_complete()
    }
}
