//! Demo credential login.

use novito_core::requests::LoginRequest;
use novito_core::responses::LoginResponse;
use reqwest::Method;

use crate::{Gateway, GatewayError, Operation};

impl Gateway {
    /// `POST /auth/login`. The backend answers 401 for unknown credentials.
    ///
    /// # Errors
    ///
    /// Missing credentials are rejected without a request.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, GatewayError> {
        let body = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        body.validate()
            .map_err(|e| GatewayError::invalid(Operation::Login, e.to_string()))?;
        self.call_json(Operation::Login, Method::POST, "/auth/login", &body)
            .await
    }
}
