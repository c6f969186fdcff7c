use novito_core::CoreError;
use novito_gateway::GatewayError;
use novito_session::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The view was torn down before the response arrived.
    #[error("view was unmounted")]
    Cancelled,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("no {entity} with id {id} in this view")]
    NotInView { entity: &'static str, id: i64 },

    #[error("audit record {0} has no prior state to restore")]
    NotUndoable(i64),
}

impl ViewError {
    /// Text for the user-facing notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Gateway(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}
