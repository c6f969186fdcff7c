//! # novito-session
//!
//! Holds the current role session for the Novito dashboard client.
//!
//! The session is a single opaque string (the role id) persisted under one
//! key, so it survives restarts until an explicit logout or until the
//! storage is cleared externally. Views subscribe to a watch channel instead
//! of polling storage.

mod error;
mod storage;

pub use error::SessionError;
pub use storage::{FileStorage, MemoryStorage, TOKEN_KEY, TokenStorage};

use tokio::sync::watch;

/// An active session. The token is the declared role id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: String,
}

/// Persisted session plus change notifications.
pub struct SessionStore<S: TokenStorage> {
    storage: S,
    tx: watch::Sender<Option<Session>>,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Open the store, restoring any session left in `storage`.
    pub fn open(storage: S) -> Result<Self, SessionError> {
        let restored = storage.load()?.map(|role| Session { role });
        if let Some(session) = &restored {
            tracing::debug!(role = %session.role, "restored session");
        }
        let (tx, _rx) = watch::channel(restored);
        Ok(Self { storage, tx })
    }

    /// Persist `role` as the session token and notify subscribers.
    pub fn login(&self, role: &str) -> Result<Session, SessionError> {
        let role = role.trim();
        if role.is_empty() {
            return Err(SessionError::EmptyRole);
        }
        self.storage.store(role)?;
        let session = Session {
            role: role.to_string(),
        };
        tracing::info!(role, "logged in");
        self.tx.send_replace(Some(session.clone()));
        Ok(session)
    }

    /// Delete the token and notify subscribers.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.storage.delete()?;
        tracing::info!("logged out");
        self.tx.send_replace(None);
        Ok(())
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }

    /// Re-read storage, picking up external changes such as a deleted token
    /// file. Subscribers are notified only if the session changed.
    pub fn reload(&self) -> Result<Option<Session>, SessionError> {
        let loaded = self.storage.load()?.map(|role| Session { role });
        self.tx.send_if_modified(|current| {
            if *current == loaded {
                false
            } else {
                current.clone_from(&loaded);
                true
            }
        });
        Ok(loaded)
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}
