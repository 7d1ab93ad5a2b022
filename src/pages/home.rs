//! Authenticated landing screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! First stop after login. Greets the signed-in user and links to the
//! sections their roles can reach; section visibility mirrors the navbar.

use leptos::prelude::*;

use crate::components::navbar::NavBar;
use crate::state::session::SessionState;
use crate::util::auth;

/// Home page — greeting plus section shortcuts.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let display_name = move || {
        session
            .get()
            .user
            .map(|user| user.display_name)
            .unwrap_or_default()
    };
    let role_line = move || session.with(|state| state.roles().join(", "));

    view! {
        <div class="home-page">
            <NavBar/>
            <section class="home-page__body">
                <h1>{move || format!("Hola, {}", display_name())}</h1>
                <p class="home-page__roles">{role_line}</p>

                <div class="home-page__cards">
                    <Show when=move || auth::has_any_role(session, &["admin", "Recepcionista"])>
                        <a href="/clientes" class="home-card">
                            <h2>"Clientes"</h2>
                            <p>"Altas, datos de contacto y cuentas."</p>
                        </a>
                    </Show>
                    <Show when=move || auth::has_any_role(session, &["admin", "Mecanico"])>
                        <a href="/vehiculos" class="home-card">
                            <h2>"Vehículos"</h2>
                            <p>"Flota, patentes e historial de trabajos."</p>
                        </a>
                    </Show>
                    <a href="/turnos" class="home-card">
                        <h2>"Turnos"</h2>
                        <p>"Agenda del taller y asignaciones."</p>
                    </a>
                </div>
            </section>
        </div>
    }
}
