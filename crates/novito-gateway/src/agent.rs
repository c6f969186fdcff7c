//! Review queue and suggestion engine endpoints.

use novito_core::entities::Suggestion;
use novito_core::responses::SuggestionRun;
use reqwest::Method;
use serde_json::Value;

use crate::{Gateway, GatewayError, Operation, Query, require_positive};

impl Gateway {
    /// `GET /agent/suggestions?workspace_id&applied=false`: pending
    /// suggestions only.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on invalid input, transport failure,
    /// non-success status, or an undecodable body.
    pub async fn list_suggestions(
        &self,
        workspace_id: i64,
    ) -> Result<Vec<Suggestion>, GatewayError> {
        require_positive(Operation::ListSuggestions, "workspace id", workspace_id)?;
        let path = Query::new()
            .with("workspace_id", workspace_id)
            .with("applied", false)
            .on("/agent/suggestions");
        self.call(Operation::ListSuggestions, Method::GET, &path).await
    }

    /// `PATCH /agent/suggestions/{id}/apply?actor_id`
    ///
    /// # Errors
    ///
    /// See [`Gateway::list_suggestions`].
    pub async fn apply_suggestion(
        &self,
        suggestion_id: i64,
        actor_id: Option<i64>,
    ) -> Result<Value, GatewayError> {
        self.decide(Operation::ApplySuggestion, "apply", suggestion_id, actor_id)
            .await
    }

    /// `PATCH /agent/suggestions/{id}/reject?actor_id`
    ///
    /// # Errors
    ///
    /// See [`Gateway::list_suggestions`].
    pub async fn reject_suggestion(
        &self,
        suggestion_id: i64,
        actor_id: Option<i64>,
    ) -> Result<Value, GatewayError> {
        self.decide(Operation::RejectSuggestion, "reject", suggestion_id, actor_id)
            .await
    }

    /// `POST /agent/run-suggestions?workspace_id`
    ///
    /// # Errors
    ///
    /// See [`Gateway::list_suggestions`].
    pub async fn run_suggestions(&self, workspace_id: i64) -> Result<SuggestionRun, GatewayError> {
        require_positive(Operation::RunSuggestions, "workspace id", workspace_id)?;
        let path = Query::new()
            .with("workspace_id", workspace_id)
            .on("/agent/run-suggestions");
        self.call(Operation::RunSuggestions, Method::POST, &path).await
    }

    async fn decide(
        &self,
        operation: Operation,
        verb: &str,
        suggestion_id: i64,
        actor_id: Option<i64>,
    ) -> Result<Value, GatewayError> {
        require_positive(operation, "suggestion id", suggestion_id)?;
        if let Some(actor_id) = actor_id {
            require_positive(operation, "actor id", actor_id)?;
        }
        let path = Query::new()
            .with_opt("actor_id", actor_id)
            .on(&format!("/agent/suggestions/{suggestion_id}/{verb}"));
        self.call(operation, Method::PATCH, &path).await
    }
}
