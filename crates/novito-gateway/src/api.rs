//! The seam between views and the backend.

use std::future::Future;

use novito_core::entities::{AuditRecord, Suggestion, Task, Workspace};
use novito_core::enums::{AnalyticsKind, SmartAction, TaskStatus};
use novito_core::requests::{AgentModeUpdate, MeetingRequest, TaskUpdate};
use novito_core::responses::{
    ActionAck, AnalyticsSnapshot, BriefingSnapshot, ChatReply, LoginResponse, MeetingOutcome,
    SmartActionOutcome, SuggestionRun,
};
use serde_json::Value;

use crate::{Gateway, GatewayError};

/// Every backend capability a view can ask for.
///
/// [`Gateway`] is the HTTP implementation. View controllers are generic over
/// this trait so they can run against an in-memory backend.
pub trait DashboardApi: Send + Sync {
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginResponse, GatewayError>> + Send;

    fn list_tasks(
        &self,
        workspace_id: i64,
        status: Option<TaskStatus>,
    ) -> impl Future<Output = Result<Vec<Task>, GatewayError>> + Send;

    fn get_task(&self, task_id: i64) -> impl Future<Output = Result<Task, GatewayError>> + Send;

    fn update_task(
        &self,
        task_id: i64,
        update: &TaskUpdate,
    ) -> impl Future<Output = Result<Task, GatewayError>> + Send;

    fn capture_task(
        &self,
        workspace_id: i64,
        text: &str,
    ) -> impl Future<Output = Result<Task, GatewayError>> + Send;

    fn list_blockers(
        &self,
        workspace_id: i64,
    ) -> impl Future<Output = Result<Vec<Task>, GatewayError>> + Send;

    fn list_suggestions(
        &self,
        workspace_id: i64,
    ) -> impl Future<Output = Result<Vec<Suggestion>, GatewayError>> + Send;

    fn apply_suggestion(
        &self,
        suggestion_id: i64,
        actor_id: Option<i64>,
    ) -> impl Future<Output = Result<Value, GatewayError>> + Send;

    fn reject_suggestion(
        &self,
        suggestion_id: i64,
        actor_id: Option<i64>,
    ) -> impl Future<Output = Result<Value, GatewayError>> + Send;

    fn run_suggestions(
        &self,
        workspace_id: i64,
    ) -> impl Future<Output = Result<SuggestionRun, GatewayError>> + Send;

    fn list_audits(
        &self,
        workspace_id: i64,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<AuditRecord>, GatewayError>> + Send;

    fn undo_audit(
        &self,
        audit_id: i64,
    ) -> impl Future<Output = Result<ActionAck, GatewayError>> + Send;

    fn fetch_analytics(
        &self,
        kind: AnalyticsKind,
        workspace_id: i64,
    ) -> impl Future<Output = Result<AnalyticsSnapshot, GatewayError>> + Send;

    fn daily_briefing(
        &self,
        workspace_id: i64,
        user_id: Option<i64>,
    ) -> impl Future<Output = Result<BriefingSnapshot, GatewayError>> + Send;

    fn chat_query(
        &self,
        question: &str,
        workspace_id: i64,
    ) -> impl Future<Output = Result<ChatReply, GatewayError>> + Send;

    fn run_smart_action(
        &self,
        action: SmartAction,
        workspace_id: i64,
    ) -> impl Future<Output = Result<SmartActionOutcome, GatewayError>> + Send;

    fn process_meeting(
        &self,
        request: &MeetingRequest,
    ) -> impl Future<Output = Result<MeetingOutcome, GatewayError>> + Send;

    fn get_workspace(
        &self,
        workspace_id: i64,
    ) -> impl Future<Output = Result<Workspace, GatewayError>> + Send;

    fn update_agent_mode(
        &self,
        workspace_id: i64,
        update: &AgentModeUpdate,
    ) -> impl Future<Output = Result<Workspace, GatewayError>> + Send;
}

impl DashboardApi for Gateway {
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginResponse, GatewayError>> + Send {
        Self::login(self, username, password)
    }

    fn list_tasks(
        &self,
        workspace_id: i64,
        status: Option<TaskStatus>,
    ) -> impl Future<Output = Result<Vec<Task>, GatewayError>> + Send {
        Self::list_tasks(self, workspace_id, status)
    }

    fn get_task(&self, task_id: i64) -> impl Future<Output = Result<Task, GatewayError>> + Send {
        Self::get_task(self, task_id)
    }

    fn update_task(
        &self,
        task_id: i64,
        update: &TaskUpdate,
    ) -> impl Future<Output = Result<Task, GatewayError>> + Send {
        Self::update_task(self, task_id, update)
    }

    fn capture_task(
        &self,
        workspace_id: i64,
        text: &str,
    ) -> impl Future<Output = Result<Task, GatewayError>> + Send {
        Self::capture_task(self, workspace_id, text)
    }

    fn list_blockers(
        &self,
        workspace_id: i64,
    ) -> impl Future<Output = Result<Vec<Task>, GatewayError>> + Send {
        Self::list_blockers(self, workspace_id)
    }

    fn list_suggestions(
        &self,
        workspace_id: i64,
    ) -> impl Future<Output = Result<Vec<Suggestion>, GatewayError>> + Send {
        Self::list_suggestions(self, workspace_id)
    }

    fn apply_suggestion(
        &self,
        suggestion_id: i64,
        actor_id: Option<i64>,
    ) -> impl Future<Output = Result<Value, GatewayError>> + Send {
        Self::apply_suggestion(self, suggestion_id, actor_id)
    }

    fn reject_suggestion(
        &self,
        suggestion_id: i64,
        actor_id: Option<i64>,
    ) -> impl Future<Output = Result<Value, GatewayError>> + Send {
        Self::reject_suggestion(self, suggestion_id, actor_id)
    }

    fn run_suggestions(
        &self,
        workspace_id: i64,
    ) -> impl Future<Output = Result<SuggestionRun, GatewayError>> + Send {
        Self::run_suggestions(self, workspace_id)
    }

    fn list_audits(
        &self,
        workspace_id: i64,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<AuditRecord>, GatewayError>> + Send {
        Self::list_audits(self, workspace_id, limit)
    }

    fn undo_audit(
        &self,
        audit_id: i64,
    ) -> impl Future<Output = Result<ActionAck, GatewayError>> + Send {
        Self::undo_audit(self, audit_id)
    }

    fn fetch_analytics(
        &self,
        kind: AnalyticsKind,
        workspace_id: i64,
    ) -> impl Future<Output = Result<AnalyticsSnapshot, GatewayError>> + Send {
        Self::fetch_analytics(self, kind, workspace_id)
    }

    fn daily_briefing(
        &self,
        workspace_id: i64,
        user_id: Option<i64>,
    ) -> impl Future<Output = Result<BriefingSnapshot, GatewayError>> + Send {
        Self::daily_briefing(self, workspace_id, user_id)
    }

    fn chat_query(
        &self,
        question: &str,
        workspace_id: i64,
    ) -> impl Future<Output = Result<ChatReply, GatewayError>> + Send {
        Self::chat_query(self, question, workspace_id)
    }

    fn run_smart_action(
        &self,
        action: SmartAction,
        workspace_id: i64,
    ) -> impl Future<Output = Result<SmartActionOutcome, GatewayError>> + Send {
        Self::run_smart_action(self, action, workspace_id)
    }

    fn process_meeting(
        &self,
        request: &MeetingRequest,
    ) -> impl Future<Output = Result<MeetingOutcome, GatewayError>> + Send {
        Self::process_meeting(self, request)
    }

    fn get_workspace(
        &self,
        workspace_id: i64,
    ) -> impl Future<Output = Result<Workspace, GatewayError>> + Send {
        Self::get_workspace(self, workspace_id)
    }

    fn update_agent_mode(
        &self,
        workspace_id: i64,
        update: &AgentModeUpdate,
    ) -> impl Future<Output = Result<Workspace, GatewayError>> + Send {
        Self::update_agent_mode(self, workspace_id, update)
    }
}
