use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn login_endpoint_path() {
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
}

#[test]
fn logout_endpoint_path() {
    assert_eq!(LOGOUT_ENDPOINT, "/api/auth/logout");
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn classify_status_401_is_invalid_credentials() {
    assert_eq!(classify_status(401), AuthError::InvalidCredentials);
}

#[test]
fn classify_status_403_is_invalid_credentials() {
    assert_eq!(classify_status(403), AuthError::InvalidCredentials);
}

#[test]
fn classify_status_500_is_server_error() {
    assert_eq!(classify_status(500), AuthError::Server("status 500".to_owned()));
}

#[test]
fn classify_status_404_is_server_error() {
    assert_eq!(classify_status(404), AuthError::Server("status 404".to_owned()));
}

#[test]
fn malformed_body_is_a_server_error() {
    assert!(matches!(malformed_body_error(), AuthError::Server(_)));
}

// =============================================================
// Error display
// =============================================================

#[test]
fn auth_error_display_messages() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid credentials");
    assert_eq!(
        AuthError::Network("timeout".to_owned()).to_string(),
        "network error: timeout"
    );
    assert_eq!(
        AuthError::Server("status 502".to_owned()).to_string(),
        "server error: status 502"
    );
    assert_eq!(AuthError::Cancelled.to_string(), "login superseded by logout");
}
