use novito_core::CoreError;
use novito_gateway::DashboardApi;
use serde_json::Value;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::{Notice, ViewState};

const GREETING: &str = "Hello. I can help you analyze your workspace data. Ask me about \
                        overdue tasks, blockers, velocity, workload, risks, or any other metrics.";
const FAILURE_REPLY: &str = "Failed to process query. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    /// Tone hint from the backend: `info`, `success`, `alert`, `error`, ...
    pub kind: String,
    pub data: Value,
}

impl ChatMessage {
    fn user(text: &str) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.to_string(),
            kind: "info".into(),
            data: Value::Null,
        }
    }

    fn assistant(text: impl Into<String>, kind: impl Into<String>, data: Value) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
            kind: kind.into(),
            data,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == "error"
    }
}

/// Question/answer transcript against the analytics chat endpoint.
///
/// Backend failures are answered inline with an error-typed assistant
/// message instead of a notice, so the transcript always alternates.
pub struct ChatSession<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    state: ViewState<Vec<ChatMessage>>,
}

impl<A: DashboardApi> ChatSession<A> {
    #[must_use]
    pub fn new(ctx: ViewContext<A>) -> Self {
        Self {
            ctx,
            lifecycle: Lifecycle::new(),
            state: ViewState::ready(vec![ChatMessage::assistant(
                GREETING,
                "info",
                Value::Null,
            )]),
        }
    }

    /// Send a question and return the assistant's answer.
    pub async fn ask(&mut self, question: &str) -> Result<ChatMessage, ViewError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(CoreError::Validation("question must not be empty".into()).into());
        }

        self.state.begin_submit()?;
        if let Some(messages) = self.state.data_mut() {
            messages.push(ChatMessage::user(question));
        }

        let result = self
            .lifecycle
            .run(self.ctx.api().chat_query(question, self.ctx.workspace_id))
            .await?;
        let reply = match result {
            Ok(reply) => ChatMessage::assistant(reply.response, reply.kind, reply.data),
            Err(err) => {
                tracing::warn!(error = %err, "chat query failed");
                ChatMessage::assistant(FAILURE_REPLY, "error", Value::Null)
            }
        };

        if let Some(messages) = self.state.data_mut() {
            messages.push(reply.clone());
        }
        self.state.finish_submit()?;
        Ok(reply)
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        self.state.data().map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<ChatMessage>> {
        &self.state
    }

    /// Acknowledge the pending notice. A failed view keeps its data and
    /// accepts actions again.
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.state.dismiss_notice()
    }

    #[must_use]
    pub const fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}
