//! # novito-views
//!
//! Everything between the session and the terminal: role resolution, the
//! per-view state machine, request cancellation, and one controller per
//! dashboard page.
//!
//! Controllers are generic over [`DashboardApi`](novito_gateway::DashboardApi)
//! and own their state. Data flows one way: a controller fetches through the
//! gateway, replaces its local copy, and the renderer reads it back.

pub mod context;
pub mod controllers;
pub mod error;
pub mod lifecycle;
pub mod resolver;
pub mod shell;
pub mod state;

pub use context::ViewContext;
pub use error::ViewError;
pub use lifecycle::Lifecycle;
pub use novito_config::SyncPolicy;
pub use resolver::{NavEntry, Page, RoleView, TaskScope, resolve, view_for};
pub use shell::{Route, Shell};
pub use state::{Notice, NoticeKind, ViewPhase, ViewState};
