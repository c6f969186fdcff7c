use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("role must not be empty")]
    EmptyRole,

    #[error("home directory not found; set session.path to store the token elsewhere")]
    NoHomeDir,

    #[error("token store error: {0}")]
    Storage(String),
}
