//! Role-to-view resolution.
//!
//! A pure mapping from the declared role to the navigation entries and the
//! dashboard content that role sees. No I/O, no clock.

use std::fmt;

use novito_core::entities::Task;
use novito_core::enums::{Role, TaskStatus};

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A routable page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Meetings,
    Review,
    Tasks,
    Team,
    Reports,
    Analytics,
    Blockers,
    Audit,
    SmartActions,
    Settings,
    Briefing,
    Chat,
}

impl Page {
    pub const ALL: [Self; 13] = [
        Self::Dashboard,
        Self::Meetings,
        Self::Review,
        Self::Tasks,
        Self::Team,
        Self::Reports,
        Self::Analytics,
        Self::Blockers,
        Self::Audit,
        Self::SmartActions,
        Self::Settings,
        Self::Briefing,
        Self::Chat,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Meetings => "/meetings",
            Self::Review => "/review",
            Self::Tasks => "/tasks",
            Self::Team => "/team",
            Self::Reports => "/reports",
            Self::Analytics => "/analytics",
            Self::Blockers => "/blockers",
            Self::Audit => "/audit",
            Self::SmartActions => "/smart-actions",
            Self::Settings => "/settings",
            Self::Briefing => "/briefing",
            Self::Chat => "/chat",
        }
    }

    /// Look a page up by route, with or without the leading slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let normalized = trimmed.strip_prefix('/').unwrap_or(trimmed);
        Self::ALL
            .into_iter()
            .find(|page| page.path().trim_start_matches('/') == normalized)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
}

impl NavEntry {
    const fn new(page: Page, label: &'static str) -> Self {
        Self { page, label }
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.page.path()
    }
}

// ---------------------------------------------------------------------------
// Dashboard content
// ---------------------------------------------------------------------------

/// Which tasks a role's dashboard and task list cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskScope {
    All,
    /// Tasks whose assignee matches this name, case-insensitively.
    AssignedTo(&'static str),
}

impl TaskScope {
    #[must_use]
    pub fn includes(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::AssignedTo(name) => task.is_assigned_to(name),
        }
    }
}

/// A labelled count over the role's task subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Total,
    Completed,
    Pending,
    InProgress,
    Blocked,
    InQa,
    Released,
}

impl StatKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Blocked => "Blocked",
            Self::InQa => "In QA",
            Self::Released => "Released",
        }
    }

    #[must_use]
    pub fn count(self, tasks: &[Task]) -> usize {
        let matching = |pred: fn(&Task) -> bool| tasks.iter().filter(|t| pred(t)).count();
        match self {
            Self::Total => tasks.len(),
            Self::Completed => matching(|t| t.status.is_complete()),
            Self::Pending => matching(|t| t.status == TaskStatus::Todo),
            Self::InProgress => matching(|t| t.status == TaskStatus::InProgress),
            Self::Blocked => matching(|t| t.is_blocked),
            Self::InQa => matching(|t| t.status == TaskStatus::Qa),
            Self::Released => matching(|t| t.status == TaskStatus::Released),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub kind: StatKind,
    pub value: usize,
}

impl Stat {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// What the dashboard page shows for a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardContent {
    pub title: &'static str,
    /// Shortcut labels shown under the title.
    pub features: &'static [&'static str],
    pub scope: TaskScope,
    pub stats: &'static [StatKind],
}

impl DashboardContent {
    /// The role's subset of `tasks`, in input order.
    #[must_use]
    pub fn select(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.scope.includes(task))
            .cloned()
            .collect()
    }

    /// Statistics over the role's subset of `tasks`.
    #[must_use]
    pub fn stats_for(&self, tasks: &[Task]) -> Vec<Stat> {
        let subset = self.select(tasks);
        self.stats
            .iter()
            .map(|&kind| Stat {
                kind,
                value: kind.count(&subset),
            })
            .collect()
    }
}

/// Everything the shell needs to render a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleView {
    pub role: Role,
    pub nav: Vec<NavEntry>,
    pub content: DashboardContent,
}

impl RoleView {
    #[must_use]
    pub fn allows(&self, page: Page) -> bool {
        self.nav.iter().any(|entry| entry.page == page)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a raw session token. Unrecognized roles get the member view.
#[must_use]
pub fn resolve(raw_role: &str) -> RoleView {
    view_for(Role::resolve(raw_role))
}

#[must_use]
pub fn view_for(role: Role) -> RoleView {
    RoleView {
        role,
        nav: nav_for(role),
        content: content_for(role),
    }
}

fn nav_for(role: Role) -> Vec<NavEntry> {
    use Page as P;

    let dashboard = NavEntry::new(P::Dashboard, "Dashboard");
    let meetings = NavEntry::new(P::Meetings, "Meetings");
    let reports = NavEntry::new(P::Reports, "Reports");
    let briefing = NavEntry::new(P::Briefing, "Briefing");
    let blockers = NavEntry::new(P::Blockers, "Blockers");
    let analytics = NavEntry::new(P::Analytics, "Analytics");
    let review = NavEntry::new(P::Review, "Review Tasks");

    match role {
        Role::Admin => vec![
            dashboard,
            meetings,
            review,
            NavEntry::new(P::Tasks, "All Tasks"),
            NavEntry::new(P::Team, "Team"),
            reports,
            analytics,
            blockers,
            NavEntry::new(P::Audit, "Audit Trail"),
            NavEntry::new(P::SmartActions, "Smart Actions"),
            NavEntry::new(P::Settings, "Settings"),
        ],
        Role::Manager => vec![
            dashboard,
            meetings,
            NavEntry::new(P::Tasks, "Team Tasks"),
            reports,
            briefing,
            blockers,
            analytics,
        ],
        Role::ProductOwner => vec![
            dashboard,
            meetings,
            NavEntry::new(P::Tasks, "Team Tasks"),
            reports,
            briefing,
            review,
        ],
        Role::Developer | Role::Qa => vec![
            dashboard,
            NavEntry::new(P::Tasks, "My Tasks"),
            briefing,
            NavEntry::new(P::Chat, "Ask Agent"),
        ],
        Role::Member => vec![dashboard, NavEntry::new(P::Tasks, "My Tasks")],
    }
}

const fn content_for(role: Role) -> DashboardContent {
    use StatKind as S;

    match role {
        Role::Admin => DashboardContent {
            title: "Admin Dashboard",
            features: &["Manage Users", "System Settings", "View All Reports", "Audit Logs"],
            scope: TaskScope::All,
            stats: &[S::Total, S::Completed, S::Pending, S::Blocked],
        },
        Role::Manager => DashboardContent {
            title: "Manager Dashboard",
            features: &["Team Workload", "Blocker Triage", "Daily Briefing", "Team Reports"],
            scope: TaskScope::All,
            stats: &[S::Total, S::InProgress, S::Completed, S::Blocked],
        },
        Role::ProductOwner => DashboardContent {
            title: "Product Owner Dashboard",
            features: &["Manage Backlog", "Sprint Planning", "Stakeholder Reports", "Roadmap"],
            scope: TaskScope::AssignedTo("product_owner"),
            stats: &[S::Total, S::Pending, S::InQa, S::Released],
        },
        Role::Developer => DashboardContent {
            title: "Developer Dashboard",
            features: &["Code Reviews", "Pull Requests", "Build Status", "Documentation"],
            scope: TaskScope::AssignedTo("dev1"),
            stats: &[S::Total, S::InProgress, S::Blocked, S::Completed],
        },
        Role::Qa => DashboardContent {
            title: "QA Dashboard",
            features: &["Test Cases", "Bug Reports", "Test Automation", "Quality Metrics"],
            scope: TaskScope::AssignedTo("qa1"),
            stats: &[S::Total, S::InQa, S::Pending, S::Completed],
        },
        Role::Member => DashboardContent {
            title: "Dashboard",
            features: &[],
            scope: TaskScope::AssignedTo("member"),
            stats: &[S::Total, S::InProgress, S::Completed],
        },
    }
}
