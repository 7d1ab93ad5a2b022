//! Vehículos screen (admin and mechanics only).

use leptos::prelude::*;

use crate::components::navbar::NavBar;
use crate::state::session::SessionState;
use crate::util::auth;

/// Vehículos page — fleet listing shell with role-gated actions.
#[component]
pub fn VehiculosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="vehiculos-page">
            <NavBar/>
            <section class="vehiculos-page__body">
                <header class="section-header">
                    <h1>"Vehículos"</h1>
                    <Show when=move || auth::has_role(session, "admin")>
                        <button class="btn section-header__action">"+ Alta de vehículo"</button>
                    </Show>
                </header>
                <p class="section-empty">"No hay vehículos registrados."</p>
            </section>
        </div>
    }
}
