use super::*;

// =============================================================
// validate_login_input
// =============================================================

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@taller.test  ", "secreta"),
        Ok(("ana@taller.test".to_owned(), "secreta".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(
        validate_login_input("   ", "secreta"),
        Err("Ingresá el correo y la contraseña.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("ana@taller.test", ""),
        Err("Ingresá el correo y la contraseña.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("ana@taller.test", "  con espacios  "),
        Ok(("ana@taller.test".to_owned(), "  con espacios  ".to_owned()))
    );
}

// =============================================================
// login_error_message
// =============================================================

#[test]
fn invalid_credentials_message_is_user_correctable() {
    assert_eq!(
        login_error_message(&AuthError::InvalidCredentials),
        "Correo o contraseña incorrectos."
    );
}

#[test]
fn network_error_message_suggests_retry() {
    assert_eq!(
        login_error_message(&AuthError::Network("timeout".to_owned())),
        "No se pudo conectar. Intentá de nuevo."
    );
}

#[test]
fn server_error_message_is_opaque() {
    assert_eq!(
        login_error_message(&AuthError::Server("status 500".to_owned())),
        "El servidor no pudo procesar el ingreso."
    );
}

#[test]
fn cancelled_login_has_its_own_message() {
    assert_eq!(
        login_error_message(&AuthError::Cancelled),
        "El ingreso fue cancelado."
    );
}
