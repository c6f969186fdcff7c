//! View state machine.
//!
//! ```text
//! Loading ──> Ready ──> Submitting ──> Ready
//!    │          │           │
//!    v          v           v
//! Failed <──────────────────┘
//!    └──> Loading | Ready
//! ```
//!
//! A view keeps its last good data through failures. A failure surfaces one
//! blocking [`Notice`]; dismissing it returns to `Ready` if data is present.

use std::fmt;

use novito_core::CoreError;
use novito_gateway::GatewayError;

use crate::error::ViewError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewPhase {
    Loading,
    Ready,
    Submitting,
    Failed,
}

impl ViewPhase {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Loading => &[Self::Ready, Self::Failed],
            Self::Ready => &[Self::Submitting, Self::Loading],
            Self::Submitting => &[Self::Ready, Self::Failed],
            Self::Failed => &[Self::Loading, Self::Ready],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Submitting => "submitting",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Phase, last good data, and the pending notice of one view.
#[derive(Debug, Clone)]
pub struct ViewState<T> {
    phase: ViewPhase,
    data: Option<T>,
    notice: Option<Notice>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewState<T> {
    /// A freshly mounted view, waiting for its first fetch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: ViewPhase::Loading,
            data: None,
            notice: None,
        }
    }

    /// A view that needs no initial fetch.
    #[must_use]
    pub const fn ready(data: T) -> Self {
        Self {
            phase: ViewPhase::Ready,
            data: Some(data),
            notice: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> ViewPhase {
        self.phase
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Acknowledge the notice. A failed view with data becomes usable again.
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        let notice = self.notice.take();
        if self.phase == ViewPhase::Failed && self.data.is_some() {
            self.phase = ViewPhase::Ready;
        }
        notice
    }

    pub fn transition(&mut self, next: ViewPhase) -> Result<(), CoreError> {
        if !self.phase.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "view".into(),
                from: self.phase.to_string(),
                to: next.to_string(),
            });
        }
        self.phase = next;
        Ok(())
    }

    /// Start a (re)load. A new mount cycle clears the previous notice.
    pub(crate) fn begin_load(&mut self) -> Result<(), ViewError> {
        if self.phase != ViewPhase::Loading {
            self.transition(ViewPhase::Loading)?;
        }
        self.notice = None;
        Ok(())
    }

    /// Apply a fetch result. The data is replaced wholesale, never merged.
    pub(crate) fn finish_load(&mut self, result: Result<T, GatewayError>) -> Result<(), ViewError> {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.transition(ViewPhase::Ready)?;
                Ok(())
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Start an action. A failed view that still holds data is acknowledged
    /// first, so a later action is not blocked by an earlier failure.
    pub(crate) fn begin_submit(&mut self) -> Result<(), ViewError> {
        if self.phase == ViewPhase::Failed && self.data.is_some() {
            self.dismiss_notice();
        }
        self.transition(ViewPhase::Submitting)?;
        self.notice = None;
        Ok(())
    }

    pub(crate) fn finish_submit(&mut self) -> Result<(), ViewError> {
        self.transition(ViewPhase::Ready)?;
        Ok(())
    }

    /// Move to `Failed`, keeping data, and surface one error notice.
    /// Returns the error for the caller to propagate.
    pub(crate) fn fail(&mut self, err: ViewError) -> ViewError {
        if let Err(invalid) = self.transition(ViewPhase::Failed) {
            return invalid.into();
        }
        if self.notice.is_none() {
            self.notice = Some(Notice::error(err.user_message()));
        }
        err
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub(crate) const fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    pub(crate) fn set_data(&mut self, data: T) {
        self.data = Some(data);
    }
}
