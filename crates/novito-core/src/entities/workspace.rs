use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AgentMode;

const fn default_threshold() -> f64 {
    0.85
}

/// Agent tuning stored on the workspace.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AgentConfig {
    /// Minimum confidence for the agent to act without review, in `[0, 1]`.
    #[serde(default = "default_threshold")]
    pub auto_confidence_threshold: f64,
    /// Suggestion types the agent may apply on its own in `auto` mode.
    #[serde(default)]
    pub allowed_auto_actions: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            auto_confidence_threshold: default_threshold(),
            allowed_auto_actions: vec!["set_focus_time".to_string()],
        }
    }
}

/// Tenant scope for nearly every backend call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Workspace {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub agent_mode: AgentMode,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<AgentConfig>")]
    pub agent_config: AgentConfig,
    pub created_at: Option<NaiveDateTime>,
}

fn null_as_default<'de, D>(deserializer: D) -> Result<AgentConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<AgentConfig>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_agent_config_uses_defaults() {
        let ws: Workspace =
            serde_json::from_str(r#"{"id": 1, "name": "Ops", "agent_mode": "auto", "agent_config": null}"#)
                .unwrap();
        assert_eq!(ws.agent_mode, AgentMode::Auto);
        assert!((ws.agent_config.auto_confidence_threshold - 0.85).abs() < f64::EPSILON);
        assert_eq!(ws.agent_config.allowed_auto_actions, vec!["set_focus_time"]);
    }

    #[test]
    fn partial_agent_config_fills_threshold() {
        let ws: Workspace = serde_json::from_str(
            r#"{"id": 1, "agent_config": {"allowed_auto_actions": []}}"#,
        )
        .unwrap();
        assert!(ws.agent_config.allowed_auto_actions.is_empty());
        assert!((ws.agent_config.auto_confidence_threshold - 0.85).abs() < f64::EPSILON);
    }
}
