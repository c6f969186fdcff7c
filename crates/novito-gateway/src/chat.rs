//! Workspace Q&A endpoint.

use novito_core::responses::ChatReply;
use reqwest::Method;

use crate::{Gateway, GatewayError, Operation, Query, require_positive, require_text};

impl Gateway {
    /// `POST /chat/query?question&workspace_id`. The question travels in the
    /// query string, not the body.
    ///
    /// # Errors
    ///
    /// Blank questions are rejected without a request.
    pub async fn chat_query(
        &self,
        question: &str,
        workspace_id: i64,
    ) -> Result<ChatReply, GatewayError> {
        require_text(Operation::ChatQuery, "question", question)?;
        require_positive(Operation::ChatQuery, "workspace id", workspace_id)?;
        let path = Query::new()
            .with("question", question.trim())
            .with("workspace_id", workspace_id)
            .on("/chat/query");
        self.call(Operation::ChatQuery, Method::POST, &path).await
    }
}
