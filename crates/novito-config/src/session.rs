//! Session token storage location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Token file override. Defaults to `~/.novito/token`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl SessionConfig {
    /// Resolved token file path, or `None` if no home directory is known and
    /// no override is set.
    #[must_use]
    pub fn token_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".novito").join("token")))
    }
}
