//! Turnos screen (any authenticated user).
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication-only route: mechanics consult the agenda read-only, while
//! reception and admin also get the scheduling action via an in-page role
//! check.

use leptos::prelude::*;

use crate::components::navbar::NavBar;
use crate::state::session::SessionState;
use crate::util::auth;

/// Turnos page — workshop agenda shell.
#[component]
pub fn TurnosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let can_schedule = move || auth::has_any_role(session, &["admin", "Recepcionista"]);

    view! {
        <div class="turnos-page">
            <NavBar/>
            <section class="turnos-page__body">
                <header class="section-header">
                    <h1>"Turnos"</h1>
                    <Show when=can_schedule>
                        <button class="btn section-header__action">"+ Nuevo turno"</button>
                    </Show>
                </header>
                <Show when=move || !can_schedule()>
                    <p class="section-note">"Consulta de agenda en modo lectura."</p>
                </Show>
                <p class="section-empty">"No hay turnos agendados."</p>
            </section>
        </div>
    }
}
