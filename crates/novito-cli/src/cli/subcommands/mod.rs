mod audit;
mod blockers;
mod meetings;
mod review;
mod settings;
mod tasks;

pub use audit::AuditCommands;
pub use blockers::BlockerCommands;
pub use meetings::MeetingCommands;
pub use review::ReviewCommands;
pub use settings::SettingsCommands;
pub use tasks::TaskCommands;

use novito_core::enums::{AgentMode, Role, SmartAction, TaskStatus};

pub fn parse_role(value: &str) -> Result<Role, String> {
    value.parse().map_err(|e: novito_core::CoreError| e.to_string())
}

pub fn parse_status(value: &str) -> Result<TaskStatus, String> {
    value.parse().map_err(|e: novito_core::CoreError| e.to_string())
}

pub fn parse_mode(value: &str) -> Result<AgentMode, String> {
    value.parse().map_err(|e: novito_core::CoreError| e.to_string())
}

pub fn parse_smart_action(value: &str) -> Result<SmartAction, String> {
    SmartAction::ALL
        .into_iter()
        .find(|action| action.path_segment() == value.trim())
        .ok_or_else(|| {
            let known = SmartAction::ALL.map(SmartAction::path_segment).join(", ");
            format!("unknown smart action '{value}' (expected one of: {known})")
        })
}
