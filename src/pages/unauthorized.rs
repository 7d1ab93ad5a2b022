//! Landing page for authenticated users lacking a required role.

use leptos::prelude::*;

/// Unauthorized page — redirect target for insufficient-role access.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <div class="unauthorized-card">
                <h1>"Acceso restringido"</h1>
                <p>"Tu usuario no tiene permisos para ver esa sección."</p>
                <a href="/" class="btn">
                    "Volver al inicio"
                </a>
            </div>
        </div>
    }
}
