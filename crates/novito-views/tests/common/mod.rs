#![allow(dead_code)]

//! In-memory `DashboardApi` that records every call.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use novito_core::entities::{AgentConfig, AuditRecord, Suggestion, Task, Workspace};
use novito_core::enums::{AgentMode, AnalyticsKind, SmartAction, TaskStatus};
use novito_core::requests::{AgentModeUpdate, MeetingRequest, TaskUpdate};
use novito_core::responses::{
    ActionAck, AnalyticsSnapshot, BriefingSnapshot, ChatReply, LoginResponse, MeetingOutcome,
    SmartActionOutcome, SuggestionRun, UserProfile,
};
use novito_gateway::{DashboardApi, GatewayCause, GatewayError, Operation};
use novito_views::{SyncPolicy, ViewContext};
use serde_json::{Value, json};

pub const WORKSPACE: i64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: Operation,
    pub target: Option<i64>,
}

#[derive(Default)]
struct Backend {
    tasks: Vec<Task>,
    suggestions: Vec<Suggestion>,
    audits: Vec<AuditRecord>,
    analytics: HashMap<AnalyticsKind, Value>,
    workspace: Option<Workspace>,
    failing: HashSet<Operation>,
    calls: Vec<Call>,
    updates: Vec<(i64, TaskUpdate)>,
}

#[derive(Default)]
pub struct FakeApi {
    backend: Mutex<Backend>,
    delay: Option<Duration>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        self.backend().tasks = tasks;
        self
    }

    pub fn with_suggestions(self, suggestions: Vec<Suggestion>) -> Self {
        self.backend().suggestions = suggestions;
        self
    }

    pub fn with_audits(self, audits: Vec<AuditRecord>) -> Self {
        self.backend().audits = audits;
        self
    }

    pub fn with_analytics(self, kind: AnalyticsKind, body: Value) -> Self {
        self.backend().analytics.insert(kind, body);
        self
    }

    pub fn with_workspace(self, workspace: Workspace) -> Self {
        self.backend().workspace = Some(workspace);
        self
    }

    pub fn failing(self, op: Operation) -> Self {
        self.backend().failing.insert(op);
        self
    }

    /// Every call sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fail(&self, op: Operation) {
        self.backend().failing.insert(op);
    }

    pub fn recover(&self, op: Operation) {
        self.backend().failing.remove(&op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.backend().calls.clone()
    }

    pub fn calls_to(&self, op: Operation) -> Vec<Call> {
        self.backend()
            .calls
            .iter()
            .filter(|c| c.op == op)
            .cloned()
            .collect()
    }

    pub fn updates(&self) -> Vec<(i64, TaskUpdate)> {
        self.backend().updates.clone()
    }

    pub fn into_context(self) -> (Arc<Self>, ViewContext<Self>) {
        let api = Arc::new(self);
        let ctx = ViewContext::new(Arc::clone(&api), WORKSPACE);
        (api, ctx)
    }

    pub fn into_refetch_context(self) -> (Arc<Self>, ViewContext<Self>) {
        let (api, ctx) = self.into_context();
        (api, ctx.with_sync_policy(SyncPolicy::Refetch))
    }

    fn backend(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn enter(&self, op: Operation, target: Option<i64>) -> Result<(), GatewayError> {
        self.backend().calls.push(Call { op, target });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.backend().failing.contains(&op) {
            return Err(GatewayError::new(
                op,
                GatewayCause::Status {
                    status: 500,
                    body: r#"{"detail": "backend unavailable"}"#.into(),
                },
            ));
        }
        Ok(())
    }

    fn not_found(op: Operation) -> GatewayError {
        GatewayError::new(
            op,
            GatewayCause::Status {
                status: 404,
                body: r#"{"detail": "Not found"}"#.into(),
            },
        )
    }
}

impl DashboardApi for FakeApi {
    async fn login(&self, username: &str, _password: &str) -> Result<LoginResponse, GatewayError> {
        self.enter(Operation::Login, None).await?;
        Ok(LoginResponse {
            token: format!("token-{username}"),
            user: Some(UserProfile {
                id: 7,
                username: username.to_string(),
                display_name: username.to_string(),
                role: "manager".into(),
            }),
        })
    }

    async fn list_tasks(
        &self,
        workspace_id: i64,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, GatewayError> {
        self.enter(Operation::ListTasks, Some(workspace_id)).await?;
        Ok(self
            .backend()
            .tasks
            .iter()
            .filter(|t| status.is_none_or(|s| t.status == s))
            .cloned()
            .collect())
    }

    async fn get_task(&self, task_id: i64) -> Result<Task, GatewayError> {
        self.enter(Operation::GetTask, Some(task_id)).await?;
        self.backend()
            .tasks
            .iter()
            .find(|t| t.id == task_id)
            .cloned()
            .ok_or_else(|| Self::not_found(Operation::GetTask))
    }

    async fn update_task(&self, task_id: i64, update: &TaskUpdate) -> Result<Task, GatewayError> {
        self.enter(Operation::UpdateTask, Some(task_id)).await?;
        let mut backend = self.backend();
        backend.updates.push((task_id, update.clone()));
        let task = backend
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| Self::not_found(Operation::UpdateTask))?;
        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(progress) = update.progress {
            task.progress = progress;
        }
        if let Some(blocked) = update.is_blocked {
            task.is_blocked = blocked;
        }
        if let Some(reason) = &update.blocker_reason {
            task.blocker_reason.clone_from(reason);
        }
        Ok(task.clone())
    }

    async fn capture_task(&self, workspace_id: i64, text: &str) -> Result<Task, GatewayError> {
        self.enter(Operation::CaptureTask, Some(workspace_id)).await?;
        let mut backend = self.backend();
        let id = backend.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task::new(id, text.trim(), TaskStatus::Todo);
        backend.tasks.push(task.clone());
        Ok(task)
    }

    async fn list_blockers(&self, workspace_id: i64) -> Result<Vec<Task>, GatewayError> {
        self.enter(Operation::ListBlockers, Some(workspace_id)).await?;
        Ok(self
            .backend()
            .tasks
            .iter()
            .filter(|t| t.is_blocked)
            .cloned()
            .collect())
    }

    async fn list_suggestions(&self, workspace_id: i64) -> Result<Vec<Suggestion>, GatewayError> {
        self.enter(Operation::ListSuggestions, Some(workspace_id))
            .await?;
        Ok(self
            .backend()
            .suggestions
            .iter()
            .filter(|s| !s.applied)
            .cloned()
            .collect())
    }

    async fn apply_suggestion(
        &self,
        suggestion_id: i64,
        _actor_id: Option<i64>,
    ) -> Result<Value, GatewayError> {
        self.enter(Operation::ApplySuggestion, Some(suggestion_id))
            .await?;
        let mut backend = self.backend();
        let suggestion = backend
            .suggestions
            .iter_mut()
            .find(|s| s.id == suggestion_id)
            .ok_or_else(|| Self::not_found(Operation::ApplySuggestion))?;
        suggestion.applied = true;
        Ok(json!({"success": true, "suggestion_id": suggestion_id}))
    }

    async fn reject_suggestion(
        &self,
        suggestion_id: i64,
        _actor_id: Option<i64>,
    ) -> Result<Value, GatewayError> {
        self.enter(Operation::RejectSuggestion, Some(suggestion_id))
            .await?;
        self.backend().suggestions.retain(|s| s.id != suggestion_id);
        Ok(json!({"success": true}))
    }

    async fn run_suggestions(&self, workspace_id: i64) -> Result<SuggestionRun, GatewayError> {
        self.enter(Operation::RunSuggestions, Some(workspace_id))
            .await?;
        let mut backend = self.backend();
        let id = backend.suggestions.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        backend.suggestions.push(suggestion(id, 0.7));
        Ok(SuggestionRun {
            success: true,
            suggestions_created: 1,
        })
    }

    async fn list_audits(
        &self,
        workspace_id: i64,
        limit: u32,
    ) -> Result<Vec<AuditRecord>, GatewayError> {
        self.enter(Operation::ListAudits, Some(workspace_id)).await?;
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self.backend().audits.iter().take(limit).cloned().collect())
    }

    async fn undo_audit(&self, audit_id: i64) -> Result<ActionAck, GatewayError> {
        self.enter(Operation::UndoAudit, Some(audit_id)).await?;
        Ok(ActionAck {
            success: true,
            message: Some("Action undone".into()),
        })
    }

    async fn fetch_analytics(
        &self,
        kind: AnalyticsKind,
        workspace_id: i64,
    ) -> Result<AnalyticsSnapshot, GatewayError> {
        self.enter(Operation::FetchAnalytics, Some(workspace_id))
            .await?;
        let body = self
            .backend()
            .analytics
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| json!({"section": kind.path_segment()}));
        Ok(AnalyticsSnapshot(body))
    }

    async fn daily_briefing(
        &self,
        workspace_id: i64,
        user_id: Option<i64>,
    ) -> Result<BriefingSnapshot, GatewayError> {
        self.enter(Operation::DailyBriefing, Some(workspace_id))
            .await?;
        Ok(BriefingSnapshot(json!({
            "user_id": user_id,
            "ai_insight": "Two tasks are overdue.",
            "summary": {"overdue_count": 2},
            "overdue_tasks": [{"id": 3}, {"id": 4}],
        })))
    }

    async fn chat_query(&self, question: &str, workspace_id: i64) -> Result<ChatReply, GatewayError> {
        self.enter(Operation::ChatQuery, Some(workspace_id)).await?;
        Ok(ChatReply {
            response: format!("You asked: {question}"),
            kind: "success".into(),
            data: Value::Null,
        })
    }

    async fn run_smart_action(
        &self,
        action: SmartAction,
        workspace_id: i64,
    ) -> Result<SmartActionOutcome, GatewayError> {
        self.enter(Operation::RunSmartAction, Some(workspace_id))
            .await?;
        let mut body = json!({"suggestion_ids": [11, 12]});
        body[action.count_field()] = json!(2);
        Ok(SmartActionOutcome(body))
    }

    async fn process_meeting(&self, request: &MeetingRequest) -> Result<MeetingOutcome, GatewayError> {
        self.enter(Operation::ProcessMeeting, Some(request.workspace_id))
            .await?;
        Ok(MeetingOutcome {
            meeting_id: 5,
            candidates: Vec::new(),
            count: 0,
        })
    }

    async fn get_workspace(&self, workspace_id: i64) -> Result<Workspace, GatewayError> {
        self.enter(Operation::GetWorkspace, Some(workspace_id)).await?;
        self.backend()
            .workspace
            .clone()
            .ok_or_else(|| Self::not_found(Operation::GetWorkspace))
    }

    async fn update_agent_mode(
        &self,
        workspace_id: i64,
        update: &AgentModeUpdate,
    ) -> Result<Workspace, GatewayError> {
        self.enter(Operation::UpdateAgentMode, Some(workspace_id))
            .await?;
        let mut backend = self.backend();
        let workspace = backend
            .workspace
            .as_mut()
            .ok_or_else(|| Self::not_found(Operation::UpdateAgentMode))?;
        workspace.agent_mode = update.agent_mode;
        workspace.agent_config = update.agent_config.clone();
        Ok(workspace.clone())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn task(id: i64, status: TaskStatus) -> Task {
    Task::new(id, format!("Task {id}"), status)
}

pub fn assigned(id: i64, status: TaskStatus, assignee: &str) -> Task {
    Task {
        assignee: Some(assignee.to_string()),
        ..task(id, status)
    }
}

pub fn blocked(id: i64, reason: &str) -> Task {
    Task {
        is_blocked: true,
        blocker_reason: Some(reason.to_string()),
        ..task(id, TaskStatus::InProgress)
    }
}

pub fn suggestion(id: i64, confidence: f64) -> Suggestion {
    serde_json::from_value(json!({
        "id": id,
        "workspace_id": WORKSPACE,
        "suggestion_type": "set_focus_time",
        "confidence": confidence,
        "payload": {"task_id": id, "focus_time": 90},
        "applied": false,
        "created_at": null,
    }))
    .unwrap()
}

pub fn audit(id: i64, action_type: &str, before: Option<Value>) -> AuditRecord {
    AuditRecord {
        id,
        workspace_id: Some(WORKSPACE),
        action_type: action_type.to_string(),
        target_type: "task".into(),
        target_id: Some(id * 10),
        actor_id: None,
        suggestion_id: None,
        before,
        after: Some(json!({"status": "done"})),
        created_at: None,
    }
}

pub fn workspace() -> Workspace {
    Workspace {
        id: WORKSPACE,
        name: "Ops".into(),
        agent_mode: AgentMode::Suggest,
        agent_config: AgentConfig::default(),
        created_at: None,
    }
}
