//! Top navigation bar for authenticated screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Surfaces the signed-in identity, role-dependent section links, and the
//! logout control. Link visibility goes through the role query helpers so
//! the bar reshapes itself within the same update cycle as a role change.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{self, LOGIN_ROUTE};
use crate::util::credential_store::LocalStorageStore;

/// Navigation bar shown on every authenticated screen.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let display_name = move || {
        session
            .get()
            .user
            .map(|user| user.display_name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        auth::logout(session, &LocalStorageStore);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">
                "Flotilla"
            </a>

            <nav class="navbar__links">
                <Show when=move || auth::has_any_role(session, &["admin", "Recepcionista"])>
                    <a href="/clientes" class="navbar__link">
                        "Clientes"
                    </a>
                </Show>
                <Show when=move || auth::has_any_role(session, &["admin", "Mecanico"])>
                    <a href="/vehiculos" class="navbar__link">
                        "Vehículos"
                    </a>
                </Show>
                <a href="/turnos" class="navbar__link">
                    "Turnos"
                </a>
            </nav>

            <span class="navbar__spacer"></span>

            <span class="navbar__self">{display_name}</span>

            <button class="btn navbar__logout" on:click=on_logout title="Cerrar sesión">
                "Salir"
            </button>
        </header>
    }
}
