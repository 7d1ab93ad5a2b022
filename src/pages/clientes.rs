//! Clientes screen (admin and reception only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Route access is enforced by `RequireRoles` at composition time; this page
//! only adds in-page conditional actions. Client data itself comes from the
//! domain REST layer, which is outside the auth core.

use leptos::prelude::*;

use crate::components::navbar::NavBar;
use crate::state::session::SessionState;
use crate::util::auth;

/// Clientes page — customer directory shell with role-gated actions.
#[component]
pub fn ClientesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="clientes-page">
            <NavBar/>
            <section class="clientes-page__body">
                <header class="section-header">
                    <h1>"Clientes"</h1>
                    <button class="btn section-header__action">"+ Nuevo cliente"</button>
                    <Show when=move || auth::has_role(session, "admin")>
                        <button class="btn section-header__action">"Exportar"</button>
                    </Show>
                </header>
                <p class="section-empty">"No hay clientes cargados."</p>
            </section>
        </div>
    }
}
