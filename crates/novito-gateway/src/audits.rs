//! Audit trail endpoints.

use novito_core::entities::AuditRecord;
use novito_core::responses::ActionAck;
use reqwest::Method;

use crate::{Gateway, GatewayError, Operation, Query, require_positive};

impl Gateway {
    /// `GET /audits/?workspace_id&limit`, newest first.
    ///
    /// # Errors
    ///
    /// A zero limit is rejected without a request.
    pub async fn list_audits(
        &self,
        workspace_id: i64,
        limit: u32,
    ) -> Result<Vec<AuditRecord>, GatewayError> {
        require_positive(Operation::ListAudits, "workspace id", workspace_id)?;
        if limit == 0 {
            return Err(GatewayError::invalid(
                Operation::ListAudits,
                "limit must be at least 1",
            ));
        }
        let path = Query::new()
            .with("workspace_id", workspace_id)
            .with("limit", limit)
            .on("/audits/");
        self.call(Operation::ListAudits, Method::GET, &path).await
    }

    /// `POST /audits/{id}/undo`: restore the record's `before` state.
    ///
    /// # Errors
    ///
    /// See [`Gateway::list_audits`].
    pub async fn undo_audit(&self, audit_id: i64) -> Result<ActionAck, GatewayError> {
        require_positive(Operation::UndoAudit, "audit id", audit_id)?;
        self.call(
            Operation::UndoAudit,
            Method::POST,
            &format!("/audits/{audit_id}/undo"),
        )
        .await
    }
}
