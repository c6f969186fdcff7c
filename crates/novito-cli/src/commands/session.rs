use serde::Serialize;

use novito_views::{NavEntry, RoleView, Route};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{LoginArgs, OpenArgs};
use crate::commands::shared::surface;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct NavRow {
    path: &'static str,
    label: &'static str,
}

impl From<&NavEntry> for NavRow {
    fn from(entry: &NavEntry) -> Self {
        Self {
            path: entry.path(),
            label: entry.label,
        }
    }
}

#[derive(Serialize)]
struct SessionResponse {
    logged_in: bool,
    role: Option<String>,
    title: Option<&'static str>,
}

impl SessionResponse {
    fn from_view(view: Option<&RoleView>) -> Self {
        Self {
            logged_in: view.is_some(),
            role: view.map(|v| v.role.to_string()),
            title: view.map(|v| v.content.title),
        }
    }
}

#[derive(Serialize)]
struct RouteResponse {
    requested: String,
    page: Option<&'static str>,
    login_required: bool,
}

/// Handle `novito login`.
pub async fn login(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = match (&args.role, &args.username, &args.password) {
        (Some(role), _, _) => ctx.shell.login(*role).map_err(surface)?,
        (None, Some(username), Some(password)) => ctx
            .shell
            .sign_in(ctx.gateway.as_ref(), username, password)
            .await
            .map_err(surface)?,
        _ => anyhow::bail!("login needs a role or --username and --password"),
    };
    output(&SessionResponse::from_view(Some(&view)), flags.format)
}

/// Handle `novito logout`.
pub fn logout(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.shell.logout().map_err(surface)?;
    output(&SessionResponse::from_view(None), flags.format)
}

/// Handle `novito whoami`.
pub fn whoami(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&SessionResponse::from_view(ctx.shell.view().as_ref()), flags.format)
}

/// Handle `novito nav`.
pub fn nav(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = ctx.require_session()?;
    let rows = view.nav.iter().map(NavRow::from).collect::<Vec<_>>();
    output(&rows, flags.format)
}

/// Handle `novito open`.
pub fn open(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = match ctx.shell.route(&args.path) {
        Route::Login => RouteResponse {
            requested: args.path.clone(),
            page: None,
            login_required: true,
        },
        Route::Page(page) => RouteResponse {
            requested: args.path.clone(),
            page: Some(page.path()),
            login_required: false,
        },
    };
    output(&response, flags.format)
}
