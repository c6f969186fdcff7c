//! Entity structs transmitted between the backend and the dashboard views.
//!
//! The backend owns every entity; the client only holds transient copies.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod audit;
mod suggestion;
mod task;
mod workspace;

pub use audit::AuditRecord;
pub use suggestion::{
    CreateTaskDetails, FocusTimeDetails, RiskDetails, SplitTaskDetails, Subtask, Suggestion,
    SuggestionDetails,
};
pub use task::Task;
pub use workspace::{AgentConfig, Workspace};
