use chrono::NaiveDateTime;
use novito_core::requests::MeetingRequest;
use novito_core::responses::MeetingOutcome;
use novito_gateway::DashboardApi;

use crate::context::ViewContext;
use crate::error::ViewError;
use crate::lifecycle::Lifecycle;
use crate::state::{Notice, ViewState};

use super::submit;

/// Transcript processing. Extracted tasks land in the review queue as
/// suggestions; this view only keeps the outcomes of this session.
pub struct MeetingsView<A> {
    ctx: ViewContext<A>,
    lifecycle: Lifecycle,
    state: ViewState<Vec<MeetingOutcome>>,
}

impl<A: DashboardApi> MeetingsView<A> {
    #[must_use]
    pub fn new(ctx: ViewContext<A>) -> Self {
        Self {
            ctx,
            lifecycle: Lifecycle::new(),
            state: ViewState::ready(Vec::new()),
        }
    }

    /// Submit a transcript. Blank titles or transcripts are refused locally.
    pub async fn process(
        &mut self,
        title: &str,
        transcript: &str,
        meeting_date: NaiveDateTime,
    ) -> Result<MeetingOutcome, ViewError> {
        let request = MeetingRequest {
            workspace_id: self.ctx.workspace_id,
            title: title.trim().to_string(),
            meeting_date,
            transcript: transcript.to_string(),
        };
        request.validate()?;

        let outcome = submit(
            &self.lifecycle,
            &mut self.state,
            self.ctx.api().process_meeting(&request),
        )
        .await?;
        tracing::info!(
            meeting_id = outcome.meeting_id,
            candidates = outcome.count,
            "meeting processed"
        );
        self.state.set_notice(Notice::info(format!(
            "Extracted {} task candidate(s); review them in the review queue",
            outcome.count
        )));
        if let Some(outcomes) = self.state.data_mut() {
            outcomes.push(outcome.clone());
        }
        Ok(outcome)
    }

    #[must_use]
    pub fn processed(&self) -> &[MeetingOutcome] {
        self.state.data().map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<MeetingOutcome>> {
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
