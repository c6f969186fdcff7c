//! View controller behaviour.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// How a view reconciles its local list after a successful mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncPolicy {
    /// Patch the local list with the mutation's outcome.
    #[default]
    Optimistic,
    /// Re-fetch the list from the backend.
    Refetch,
}

impl SyncPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimistic => "optimistic",
            Self::Refetch => "refetch",
        }
    }
}

impl FromStr for SyncPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "optimistic" => Ok(Self::Optimistic),
            "refetch" => Ok(Self::Refetch),
            other => Err(ConfigError::invalid(
                "views.sync_policy",
                format!("expected 'optimistic' or 'refetch', got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for SyncPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_audit_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ViewsConfig {
    #[serde(default)]
    pub sync_policy: SyncPolicy,

    /// Page size for the audit trail, the only server-side paging parameter.
    #[serde(default = "default_audit_limit")]
    pub audit_limit: u32,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            sync_policy: SyncPolicy::default(),
            audit_limit: default_audit_limit(),
        }
    }
}

impl ViewsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.audit_limit == 0 {
            return Err(ConfigError::invalid(
                "views.audit_limit",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ViewsConfig::default();
        assert_eq!(config.sync_policy, SyncPolicy::Optimistic);
        assert_eq!(config.audit_limit, 50);
    }

    #[test]
    fn sync_policy_parses() {
        assert_eq!("refetch".parse::<SyncPolicy>().unwrap(), SyncPolicy::Refetch);
        assert!("eventual".parse::<SyncPolicy>().is_err());
    }
}
