//! Application shell: session context, hydration, and routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the process-wide session signal, settles it from the credential
//! store exactly once at startup, and composes every protected route inside
//! `RequireRoles`. Pages never read the store or raw session fields for
//! authorization.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::route_guard::RequireRoles;
use crate::pages::clientes::ClientesPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::turnos::TurnosPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::pages::vehiculos::VehiculosPage;
use crate::state::session::SessionState;
use crate::util::auth;
use crate::util::credential_store::LocalStorageStore;

fn role_list(roles: &[&str]) -> Vec<String> {
    roles.iter().map(|r| (*r).to_owned()).collect()
}

/// Root component wiring session state, hydration, and routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Settle the persisted session once; until this runs, guards stay in
    // their loading state instead of redirecting.
    Effect::new(move || {
        if session.get_untracked().loading {
            auth::hydrate(session, &LocalStorageStore, auth::now_ms());
        }
    });

    view! {
        <Title text="Flotilla"/>
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <p class="route-missing">"Página no encontrada."</p> }>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/unauthorized") view=UnauthorizedPage/>
                    <Route
                        path=path!("/")
                        view=|| view! { <RequireRoles><HomePage/></RequireRoles> }
                    />
                    <Route
                        path=path!("/clientes")
                        view=|| view! {
                            <RequireRoles roles=role_list(&["admin", "Recepcionista"])>
                                <ClientesPage/>
                            </RequireRoles>
                        }
                    />
                    <Route
                        path=path!("/vehiculos")
                        view=|| view! {
                            <RequireRoles roles=role_list(&["admin", "Mecanico"])>
                                <VehiculosPage/>
                            </RequireRoles>
                        }
                    />
                    <Route
                        path=path!("/turnos")
                        view=|| view! { <RequireRoles><TurnosPage/></RequireRoles> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
