//! One-shot workspace analyses.

use novito_core::enums::SmartAction;
use novito_core::responses::SmartActionOutcome;
use reqwest::Method;

use crate::{Gateway, GatewayError, Operation, Query, require_positive};

impl Gateway {
    /// `POST /smart/{action}?workspace_id`
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on invalid input, transport failure,
    /// non-success status, or an undecodable body.
    pub async fn run_smart_action(
        &self,
        action: SmartAction,
        workspace_id: i64,
    ) -> Result<SmartActionOutcome, GatewayError> {
        require_positive(Operation::RunSmartAction, "workspace id", workspace_id)?;
        let path = Query::new()
            .with("workspace_id", workspace_id)
            .on(&format!("/smart/{}", action.path_segment()));
        self.call(Operation::RunSmartAction, Method::POST, &path).await
    }
}
