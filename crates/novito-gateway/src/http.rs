//! Shared HTTP response helpers.
//!
//! Centralizes status checks and body decoding so the per-area modules stay
//! focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::GatewayCause;

/// Map a non-success status to [`GatewayCause::Status`] carrying the body.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, GatewayCause> {
    if !resp.status().is_success() {
        return Err(GatewayCause::Status {
            status: resp.status().as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the whole body and decode it as JSON.
pub(crate) async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, GatewayCause> {
    let bytes = resp.bytes().await.map_err(GatewayCause::Transport)?;
    serde_json::from_slice(&bytes).map_err(|e| GatewayCause::Decode(e.to_string()))
}
