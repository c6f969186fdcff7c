//! Session-aware navigation.
//!
//! The shell is the only place that reads the session. Everything below it
//! receives an already-resolved [`RoleView`].

use novito_core::enums::Role;
use novito_gateway::DashboardApi;
use novito_session::{Session, SessionStore, TokenStorage};

use crate::error::ViewError;
use crate::resolver::{self, NavEntry, Page, RoleView};

/// Where a path lands for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// No session: only the login screen is reachable.
    Login,
    Page(Page),
}

pub struct Shell<S: TokenStorage> {
    store: SessionStore<S>,
}

impl<S: TokenStorage> Shell<S> {
    #[must_use]
    pub const fn new(store: SessionStore<S>) -> Self {
        Self { store }
    }

    /// The resolved view for the current session, if any.
    #[must_use]
    pub fn view(&self) -> Option<RoleView> {
        self.store
            .current()
            .map(|session| resolver::resolve(&session.role))
    }

    /// Navigation entries for the current session. Empty when logged out.
    #[must_use]
    pub fn navigation(&self) -> Vec<NavEntry> {
        self.view().map(|view| view.nav).unwrap_or_default()
    }

    /// Resolve a path. Unknown paths and pages outside the role's
    /// navigation fall back to the dashboard.
    #[must_use]
    pub fn route(&self, path: &str) -> Route {
        let Some(view) = self.view() else {
            return Route::Login;
        };
        match Page::from_path(path) {
            Some(page) if view.allows(page) => Route::Page(page),
            requested => {
                tracing::debug!(path, ?requested, role = %view.role, "route not in navigation");
                Route::Page(Page::Dashboard)
            }
        }
    }

    /// Quick login as a declared role.
    pub fn login(&self, role: Role) -> Result<RoleView, ViewError> {
        let session = self.store.login(role.as_str())?;
        Ok(resolver::resolve(&session.role))
    }

    /// Credential login. The role the backend reports becomes the session
    /// token.
    pub async fn sign_in<A: DashboardApi>(
        &self,
        api: &A,
        username: &str,
        password: &str,
    ) -> Result<RoleView, ViewError> {
        let response = api.login(username, password).await?;
        let session = self.store.login(response.session_role())?;
        Ok(resolver::resolve(&session.role))
    }

    pub fn logout(&self) -> Result<(), ViewError> {
        self.store.logout()?;
        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.store.current()
    }

    #[must_use]
    pub const fn store(&self) -> &SessionStore<S> {
        &self.store
    }
}
