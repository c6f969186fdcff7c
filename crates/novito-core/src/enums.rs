//! Closed enums for roles, task statuses, suggestion types, and backend actions.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Enums that name a backend route (`AnalyticsKind`, `SmartAction`) expose the
//! route segment through `path_segment()`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Client-declared identity that decides which navigation and dashboard
/// content is shown. Not a security boundary.
///
/// Quick-login ids from the original dashboard (`dev1`, `qa1`, `po`) are
/// accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    #[serde(alias = "po")]
    ProductOwner,
    #[serde(alias = "dev1", alias = "dev")]
    Developer,
    #[serde(alias = "qa1")]
    Qa,
    Member,
}

impl Role {
    /// Every role, in the order the login screen lists them.
    pub const ALL: [Self; 6] = [
        Self::Admin,
        Self::Manager,
        Self::ProductOwner,
        Self::Developer,
        Self::Qa,
        Self::Member,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::ProductOwner => "product_owner",
            Self::Developer => "developer",
            Self::Qa => "qa",
            Self::Member => "member",
        }
    }

    /// Resolve any string to a role. Unrecognized ids fall back to
    /// [`Role::Member`], the minimal default view.
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(role = raw, "unrecognized role; falling back to member view");
            Self::Member
        })
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "product_owner" | "po" => Ok(Self::ProductOwner),
            "developer" | "dev" | "dev1" => Ok(Self::Developer),
            "qa" | "qa1" => Ok(Self::Qa),
            "member" => Ok(Self::Member),
            _ => Err(CoreError::UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task as tracked by the backend.
///
/// ```text
/// todo → in_progress → qa → done → released
/// ```
///
/// The backend does not enforce ordering; the client only reads and writes
/// the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Qa,
    Done,
    Released,
}

impl TaskStatus {
    pub const ALL: [Self; 5] = [
        Self::Todo,
        Self::InProgress,
        Self::Qa,
        Self::Done,
        Self::Released,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Qa => "qa",
            Self::Done => "done",
            Self::Released => "released",
        }
    }

    /// Whether the task counts as finished work.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Done | Self::Released)
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "task status",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EffortTag
// ---------------------------------------------------------------------------

/// Rough size estimate attached to tasks and task suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EffortTag {
    Small,
    Medium,
    Large,
}

impl EffortTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for EffortTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SuggestionType
// ---------------------------------------------------------------------------

/// Kind of AI-proposed action awaiting approval.
///
/// The backend's set is open-ended, so unknown kinds are preserved verbatim in
/// [`SuggestionType::Other`] instead of failing the whole list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SuggestionType {
    CreateTask,
    SplitTask,
    SetFocusTime,
    FlagRisk,
    Reassign,
    AddDependency,
    Reprioritize,
    Other(String),
}

impl SuggestionType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CreateTask => "create_task",
            Self::SplitTask => "split_task",
            Self::SetFocusTime => "set_focus_time",
            Self::FlagRisk => "flag_risk",
            Self::Reassign => "reassign",
            Self::AddDependency => "add_dependency",
            Self::Reprioritize => "reprioritize",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for SuggestionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "create_task" => Self::CreateTask,
            "split_task" => Self::SplitTask,
            "set_focus_time" => Self::SetFocusTime,
            "flag_risk" => Self::FlagRisk,
            "reassign" => Self::Reassign,
            "add_dependency" => Self::AddDependency,
            "reprioritize" => Self::Reprioritize,
            _ => Self::Other(raw),
        }
    }
}

impl From<SuggestionType> for String {
    fn from(kind: SuggestionType) -> Self {
        match kind {
            SuggestionType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AgentMode
// ---------------------------------------------------------------------------

/// How much autonomy the workspace grants the suggestion agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AgentMode {
    Off,
    #[default]
    Suggest,
    Auto,
}

impl AgentMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Suggest => "suggest",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for AgentMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "off" => Ok(Self::Off),
            "suggest" => Ok(Self::Suggest),
            "auto" => Ok(Self::Auto),
            _ => Err(CoreError::UnknownVariant {
                kind: "agent mode",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnalyticsKind
// ---------------------------------------------------------------------------

/// One of the aggregate analytics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsKind {
    VelocityForecast,
    TaskCycleTime,
    WorkloadDistribution,
    AiEffectiveness,
}

impl AnalyticsKind {
    /// The four sections the analytics page loads on mount, in render order.
    pub const ALL: [Self; 4] = [
        Self::VelocityForecast,
        Self::TaskCycleTime,
        Self::WorkloadDistribution,
        Self::AiEffectiveness,
    ];

    /// Route segment under `/analytics/`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::VelocityForecast => "velocity-forecast",
            Self::TaskCycleTime => "task-cycle-time",
            Self::WorkloadDistribution => "workload-distribution",
            Self::AiEffectiveness => "ai-effectiveness",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::VelocityForecast => "Velocity Forecast",
            Self::TaskCycleTime => "Task Cycle Time",
            Self::WorkloadDistribution => "Workload Distribution",
            Self::AiEffectiveness => "AI Effectiveness",
        }
    }
}

impl fmt::Display for AnalyticsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

// ---------------------------------------------------------------------------
// SmartAction
// ---------------------------------------------------------------------------

/// A one-shot analysis the backend runs over a workspace, producing
/// suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SmartAction {
    DetectRisks,
    SuggestRebalance,
    FindDependencies,
    AutoPrioritize,
}

impl SmartAction {
    pub const ALL: [Self; 4] = [
        Self::DetectRisks,
        Self::SuggestRebalance,
        Self::FindDependencies,
        Self::AutoPrioritize,
    ];

    /// Route segment under `/smart/`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::DetectRisks => "detect-risks",
            Self::SuggestRebalance => "suggest-rebalance",
            Self::FindDependencies => "find-dependencies",
            Self::AutoPrioritize => "auto-prioritize",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DetectRisks => "Detect Risks",
            Self::SuggestRebalance => "Suggest Rebalance",
            Self::FindDependencies => "Find Dependencies",
            Self::AutoPrioritize => "Auto Prioritize",
        }
    }

    /// Response field that carries the number of suggestions created.
    #[must_use]
    pub const fn count_field(self) -> &'static str {
        match self {
            Self::DetectRisks => "risks_detected",
            Self::SuggestRebalance => "rebalance_suggestions",
            Self::FindDependencies => "dependencies_detected",
            Self::AutoPrioritize => "priorities_suggested",
        }
    }
}

impl fmt::Display for SmartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
