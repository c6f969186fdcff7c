//! Workspace settings endpoints.

use novito_core::entities::Workspace;
use novito_core::requests::AgentModeUpdate;
use reqwest::Method;

use crate::{Gateway, GatewayError, Operation, require_positive};

impl Gateway {
    /// `GET /workspaces/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on invalid input, transport failure,
    /// non-success status, or an undecodable body.
    pub async fn get_workspace(&self, workspace_id: i64) -> Result<Workspace, GatewayError> {
        require_positive(Operation::GetWorkspace, "workspace id", workspace_id)?;
        self.call(
            Operation::GetWorkspace,
            Method::GET,
            &format!("/workspaces/{workspace_id}"),
        )
        .await
    }

    /// `PATCH /workspaces/{id}/agent-mode`
    ///
    /// # Errors
    ///
    /// A confidence threshold outside `[0, 1]` is rejected without a request.
    pub async fn update_agent_mode(
        &self,
        workspace_id: i64,
        update: &AgentModeUpdate,
    ) -> Result<Workspace, GatewayError> {
        require_positive(Operation::UpdateAgentMode, "workspace id", workspace_id)?;
        update
            .validate()
            .map_err(|e| GatewayError::invalid(Operation::UpdateAgentMode, e.to_string()))?;
        self.call_json(
            Operation::UpdateAgentMode,
            Method::PATCH,
            &format!("/workspaces/{workspace_id}/agent-mode"),
            update,
        )
        .await
    }
}
