use std::sync::Arc;

use anyhow::Context;
use novito_config::NovitoConfig;
use novito_gateway::Gateway;
use novito_session::{FileStorage, SessionStore};
use novito_views::{Page, RoleView, Route, Shell, ViewContext};

/// Everything a command handler needs: config, backend, and session.
pub struct AppContext {
    pub config: NovitoConfig,
    pub gateway: Arc<Gateway>,
    pub shell: Shell<FileStorage>,
}

impl AppContext {
    pub fn init(config: NovitoConfig) -> anyhow::Result<Self> {
        let gateway = Gateway::from_config(&config.api).context("failed to build HTTP client")?;

        let token_path = config
            .session
            .token_path()
            .context("no home directory; set session.path (NOVITO_SESSION__PATH)")?;
        let store = SessionStore::open(FileStorage::new(token_path))
            .context("failed to read stored session")?;

        Ok(Self {
            config,
            gateway: Arc::new(gateway),
            shell: Shell::new(store),
        })
    }

    pub fn views(&self) -> ViewContext<Gateway> {
        ViewContext::from_config(Arc::clone(&self.gateway), &self.config)
    }

    /// The current role view, or an error telling the user to log in.
    pub fn require_session(&self) -> anyhow::Result<RoleView> {
        self.shell
            .view()
            .context("not logged in. Run 'novito login <role>' first.")
    }

    /// Resolve `page` for the current role, refusing pages outside its
    /// navigation.
    pub fn require_page(&self, page: Page) -> anyhow::Result<RoleView> {
        let view = self.require_session()?;
        match self.shell.route(page.path()) {
            Route::Page(routed) if routed == page => Ok(view),
            _ => anyhow::bail!(
                "{} is not available to the {} role",
                page.path(),
                view.role
            ),
        }
    }
}
