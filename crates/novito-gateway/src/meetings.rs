//! Meeting transcript processing.

use novito_core::requests::MeetingRequest;
use novito_core::responses::MeetingOutcome;
use reqwest::Method;

use crate::{Gateway, GatewayError, Operation, require_positive};

impl Gateway {
    /// `POST /meetings/process`: store the meeting and extract task
    /// candidates, which the backend files as review-queue suggestions.
    ///
    /// # Errors
    ///
    /// Blank titles or transcripts are rejected without a request.
    pub async fn process_meeting(
        &self,
        request: &MeetingRequest,
    ) -> Result<MeetingOutcome, GatewayError> {
        require_positive(Operation::ProcessMeeting, "workspace id", request.workspace_id)?;
        request
            .validate()
            .map_err(|e| GatewayError::invalid(Operation::ProcessMeeting, e.to_string()))?;
        self.call_json(
            Operation::ProcessMeeting,
            Method::POST,
            "/meetings/process",
            request,
        )
        .await
    }
}
