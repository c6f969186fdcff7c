//! # novito-gateway
//!
//! Typed async access to the Novito dashboard backend over HTTP/JSON.
//!
//! One method per backend capability, grouped by area:
//! - auth (credential login)
//! - tasks (list, fetch, update, quick capture, blockers)
//! - agent (review queue, apply/reject, suggestion engine)
//! - audits (trail, undo)
//! - analytics and daily briefing
//! - chat
//! - smart actions
//! - meetings
//! - workspaces (agent settings)
//!
//! Each call is exactly one HTTP exchange. Nothing is retried, cached or
//! de-duplicated. Inputs are validated before anything is sent.
//!
//! Views depend on the [`DashboardApi`] trait rather than on [`Gateway`]
//! directly.

pub mod agent;
pub mod analytics;
pub mod audits;
pub mod auth;
pub mod chat;
pub mod meetings;
pub mod smart;
pub mod tasks;
pub mod workspaces;

mod api;
mod error;
mod http;

pub use api::DashboardApi;
pub use error::{GatewayCause, GatewayError, Operation};

use std::fmt::Display;
use std::time::Duration;

use novito_config::ApiConfig;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::{check_response, decode};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
}

impl Gateway {
    /// Build a gateway for `base_url`. Without `timeout`, requests wait for
    /// the backend indefinitely.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the TLS backend cannot initialise.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent("novito/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Build a gateway from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// See [`Gateway::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.base_url, config.timeout_secs.map(Duration::from_secs))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request without a body and decode the JSON response.
    async fn call<T: DeserializeOwned>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
    ) -> Result<T, GatewayError> {
        let request = self.http.request(method.clone(), self.url(path));
        self.dispatch(operation, &method, path, request).await
    }

    /// Issue a request with a JSON body and decode the JSON response.
    async fn call_json<T, B>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.request(method.clone(), self.url(path)).json(body);
        self.dispatch(operation, &method, path, request).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        operation: Operation,
        method: &Method,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        tracing::debug!(%operation, %method, path, "backend request");
        let outcome = async {
            let resp = request.send().await.map_err(GatewayCause::Transport)?;
            let resp = check_response(resp).await?;
            decode(resp).await
        }
        .await;

        outcome.map_err(|cause| {
            let err = GatewayError::new(operation, cause);
            tracing::warn!(%operation, %method, path, error = %err.cause, "backend request failed");
            err
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

// ── Request helpers ────────────────────────────────────────────────

/// Percent-encoded query string builder.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub(crate) fn with_opt(self, key: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Append the query string (if any) to `path`.
    pub(crate) fn on(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let rendered: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect();
        format!("{path}?{}", rendered.join("&"))
    }
}

pub(crate) fn require_positive(
    operation: Operation,
    field: &str,
    id: i64,
) -> Result<(), GatewayError> {
    if id <= 0 {
        return Err(GatewayError::invalid(
            operation,
            format!("{field} must be positive, got {id}"),
        ));
    }
    Ok(())
}

pub(crate) fn require_text(
    operation: Operation,
    field: &str,
    value: &str,
) -> Result<(), GatewayError> {
    if value.trim().is_empty() {
        return Err(GatewayError::invalid(
            operation,
            format!("{field} must not be blank"),
        ));
    }
    Ok(())
}
