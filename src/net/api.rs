//! REST helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified into [`AuthError`] so the login page can show
//! the right message and the session flows can revert state cleanly. A
//! malformed success body counts as a server error, not a network error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::LoginResponse;

/// Login failures surfaced to the caller for display.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The API rejected the email/password pair; user-correctable.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The request never completed; transient and retryable.
    #[error("network error: {0}")]
    Network(String),
    /// The API failed or answered with something unusable.
    #[error("server error: {0}")]
    Server(String),
    /// The login resolved after a logout had already been requested; its
    /// result was discarded and the session stays unauthenticated.
    #[error("login superseded by logout")]
    Cancelled,
}

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/auth/login";

#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16) -> AuthError {
    match status {
        401 | 403 => AuthError::InvalidCredentials,
        s => AuthError::Server(format!("status {s}")),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn malformed_body_error() -> AuthError {
    AuthError::Server("malformed response body".to_owned())
}

/// Perform the login round trip against `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] on a 401/403 response,
/// [`AuthError::Network`] when the request cannot be sent or completed, and
/// [`AuthError::Server`] for any other non-success status or an unparsable
/// body.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_status(resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|_| malformed_body_error())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Notify the server of a logout via `POST /api/auth/logout`, best-effort.
///
/// The local session is already cleared by the time this runs; a failure here
/// only means the server-side token outlives the client copy.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await;
    }
}
