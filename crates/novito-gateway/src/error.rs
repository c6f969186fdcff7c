//! Gateway error types.
//!
//! Every failure carries the [`Operation`] that produced it so views can
//! report "failed to approve suggestion" rather than a bare transport error.

use std::fmt;
use thiserror::Error;

/// Backend capability a request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    ListTasks,
    GetTask,
    UpdateTask,
    CaptureTask,
    ListBlockers,
    ListSuggestions,
    ApplySuggestion,
    RejectSuggestion,
    RunSuggestions,
    ListAudits,
    UndoAudit,
    FetchAnalytics,
    DailyBriefing,
    ChatQuery,
    RunSmartAction,
    ProcessMeeting,
    GetWorkspace,
    UpdateAgentMode,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::ListTasks => "list_tasks",
            Self::GetTask => "get_task",
            Self::UpdateTask => "update_task",
            Self::CaptureTask => "capture_task",
            Self::ListBlockers => "list_blockers",
            Self::ListSuggestions => "list_suggestions",
            Self::ApplySuggestion => "apply_suggestion",
            Self::RejectSuggestion => "reject_suggestion",
            Self::RunSuggestions => "run_suggestions",
            Self::ListAudits => "list_audits",
            Self::UndoAudit => "undo_audit",
            Self::FetchAnalytics => "fetch_analytics",
            Self::DailyBriefing => "daily_briefing",
            Self::ChatQuery => "chat_query",
            Self::RunSmartAction => "run_smart_action",
            Self::ProcessMeeting => "process_meeting",
            Self::GetWorkspace => "get_workspace",
            Self::UpdateAgentMode => "update_agent_mode",
        }
    }

    /// Human phrasing used in user-facing messages.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Login => "log in",
            Self::ListTasks => "load tasks",
            Self::GetTask => "load task",
            Self::UpdateTask => "update task",
            Self::CaptureTask => "capture task",
            Self::ListBlockers => "load blockers",
            Self::ListSuggestions => "load review queue",
            Self::ApplySuggestion => "approve suggestion",
            Self::RejectSuggestion => "reject suggestion",
            Self::RunSuggestions => "run suggestion engine",
            Self::ListAudits => "load audit trail",
            Self::UndoAudit => "undo action",
            Self::FetchAnalytics => "load analytics",
            Self::DailyBriefing => "load briefing",
            Self::ChatQuery => "get an answer",
            Self::RunSmartAction => "run smart action",
            Self::ProcessMeeting => "process meeting",
            Self::GetWorkspace => "load workspace settings",
            Self::UpdateAgentMode => "save agent settings",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a gateway call failed.
#[derive(Debug, Error)]
pub enum GatewayCause {
    /// The request never produced a response (refused, reset, timed out).
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Rejected locally; no request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Error)]
#[error("{operation} failed")]
pub struct GatewayError {
    pub operation: Operation,
    #[source]
    pub cause: GatewayCause,
}

impl GatewayError {
    #[must_use]
    pub const fn new(operation: Operation, cause: GatewayCause) -> Self {
        Self { operation, cause }
    }

    pub(crate) fn invalid(operation: Operation, reason: impl Into<String>) -> Self {
        Self::new(operation, GatewayCause::InvalidInput(reason.into()))
    }

    /// HTTP status, if the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self.cause {
            GatewayCause::Status { status, .. } => Some(status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self.cause, GatewayCause::InvalidInput(_))
    }

    /// Message shown to the user in a blocking notice.
    ///
    /// For status errors the backend's `detail` field is preferred over the
    /// raw body.
    #[must_use]
    pub fn user_message(&self) -> String {
        let action = self.operation.action();
        match &self.cause {
            GatewayCause::Transport(e) if e.is_timeout() => {
                format!("Failed to {action}: the backend did not respond in time")
            }
            GatewayCause::Transport(_) => {
                format!("Failed to {action}: could not reach the backend")
            }
            GatewayCause::Status { status, body } => match detail(body) {
                Some(detail) => format!("Failed to {action}: {detail} ({status})"),
                None => format!("Failed to {action}: backend returned {status}"),
            },
            GatewayCause::Decode(_) => {
                format!("Failed to {action}: unexpected response from the backend")
            }
            GatewayCause::InvalidInput(reason) => format!("Cannot {action}: {reason}"),
        }
    }
}

/// Extract a string `detail` from a JSON error body.
fn detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_prefers_detail() {
        let err = GatewayError::new(
            Operation::Login,
            GatewayCause::Status {
                status: 401,
                body: r#"{"detail": "Invalid credentials"}"#.into(),
            },
        );
        assert_eq!(err.user_message(), "Failed to log in: Invalid credentials (401)");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn status_message_without_json_body() {
        let err = GatewayError::new(
            Operation::ApplySuggestion,
            GatewayCause::Status {
                status: 500,
                body: "Internal Server Error".into(),
            },
        );
        assert_eq!(
            err.user_message(),
            "Failed to approve suggestion: backend returned 500"
        );
    }

    #[test]
    fn invalid_input_message() {
        let err = GatewayError::invalid(Operation::ChatQuery, "question must not be blank");
        assert!(err.is_invalid_input());
        assert_eq!(
            err.user_message(),
            "Cannot get an answer: question must not be blank"
        );
        assert_eq!(err.to_string(), "chat_query failed");
    }
}
