//! Analytics and daily briefing endpoints.

use novito_core::enums::AnalyticsKind;
use novito_core::responses::{AnalyticsSnapshot, BriefingSnapshot};
use reqwest::Method;

use crate::{Gateway, GatewayError, Operation, Query, require_positive};

impl Gateway {
    /// `GET /analytics/{kind}?workspace_id`
    ///
    /// A section the backend could not compute still succeeds here; check
    /// [`AnalyticsSnapshot::error`].
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on invalid input, transport failure,
    /// non-success status, or an undecodable body.
    pub async fn fetch_analytics(
        &self,
        kind: AnalyticsKind,
        workspace_id: i64,
    ) -> Result<AnalyticsSnapshot, GatewayError> {
        require_positive(Operation::FetchAnalytics, "workspace id", workspace_id)?;
        let path = Query::new()
            .with("workspace_id", workspace_id)
            .on(&format!("/analytics/{}", kind.path_segment()));
        self.call(Operation::FetchAnalytics, Method::GET, &path).await
    }

    /// `GET /briefing/daily?workspace_id&user_id`
    ///
    /// # Errors
    ///
    /// See [`Gateway::fetch_analytics`].
    pub async fn daily_briefing(
        &self,
        workspace_id: i64,
        user_id: Option<i64>,
    ) -> Result<BriefingSnapshot, GatewayError> {
        require_positive(Operation::DailyBriefing, "workspace id", workspace_id)?;
        if let Some(user_id) = user_id {
            require_positive(Operation::DailyBriefing, "user id", user_id)?;
        }
        let path = Query::new()
            .with("workspace_id", workspace_id)
            .with_opt("user_id", user_id)
            .on("/briefing/daily");
        self.call(Operation::DailyBriefing, Method::GET, &path).await
    }
}
