//! Login page with email + password authentication.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route reachable without a session. Drives the login flow in
//! `util::auth` and maps classified failures to inline messages; an already
//! authenticated visitor is sent straight to the home screen.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::AuthError;
use crate::state::session::SessionState;

/// Validate the raw form fields, returning trimmed email plus password.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Ingresá el correo y la contraseña.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// User-facing message for a classified login failure.
fn login_error_message(err: &AuthError) -> &'static str {
    match err {
        AuthError::InvalidCredentials => "Correo o contraseña incorrectos.",
        AuthError::Network(_) => "No se pudo conectar. Intentá de nuevo.",
        AuthError::Server(_) => "El servidor no pudo procesar el ingreso.",
        AuthError::Cancelled => "El ingreso fue cancelado.",
    }
}

/// Login page — email + password form with inline error display.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();

    // Someone with a live session has no business on the login form.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(fields) => fields,
                Err(msg) => {
                    message.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::util::auth::login(
                    session,
                    &crate::util::credential_store::LocalStorageStore,
                    &email_value,
                    &password_value,
                )
                .await;
                match result {
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(err) => message.set(login_error_message(&err).to_owned()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Flotilla"</h1>
                <p class="login-card__subtitle">"Gestión de flota del taller"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="correo@taller.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
            </div>
        </div>
    }
}
