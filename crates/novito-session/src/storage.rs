//! Where the session token lives.
//!
//! Exactly one string is persisted under one well-known key. [`FileStorage`]
//! keeps it in `~/.novito/token`; [`MemoryStorage`] keeps it for the lifetime
//! of the process.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::SessionError;

/// Name of the single key the token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Persistence seam for the session token.
pub trait TokenStorage: Send + Sync {
    /// Read the token. Missing or blank values read as `None`.
    fn load(&self) -> Result<Option<String>, SessionError>;

    fn store(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the token. Removing an absent token succeeds.
    fn delete(&self) -> Result<(), SessionError>;
}

/// Token file on disk, `0600` inside a `0700` directory on Unix.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.novito/token`.
    pub fn in_home() -> Result<Self, SessionError> {
        dirs::home_dir()
            .map(|home| Self::new(home.join(".novito").join(TOKEN_KEY)))
            .ok_or(SessionError::NoHomeDir)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Storage(format!(
                "read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SessionError::Storage(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, token)
            .map_err(|e| SessionError::Storage(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                SessionError::Storage(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    fn delete(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(format!(
                "failed to delete {}: {e}",
                self.path.display()
            ))),
        }
    }
}

/// Process-local storage; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    token: Mutex<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, SessionError> {
        let token = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(token.clone().filter(|t| !t.trim().is_empty()))
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn delete(&self) -> Result<(), SessionError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_storage_path_ends_with_token() {
        if let Ok(storage) = FileStorage::in_home() {
            assert!(storage.path().ends_with(".novito/token"));
        }
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::new(tmp.path().join("nested").join("token"));

        assert_eq!(storage.load().unwrap(), None);
        storage.store("manager").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("manager"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(storage.path())
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "token file should be 0600");
        }

        storage.delete().unwrap();
        assert!(!storage.path().exists());
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn whitespace_token_reads_as_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("token");
        fs::write(&path, "   \n  ").expect("write");

        assert_eq!(FileStorage::new(path).load().unwrap(), None);
    }

    #[test]
    fn deleting_missing_file_succeeds() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        assert!(FileStorage::new(tmp.path().join("token")).delete().is_ok());
    }

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        storage.store("qa").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("qa"));
        storage.delete().unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }
}
