//! Role-based route guard wrapping protected screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only authorization surface routes consume: pages are composed inside
//! `RequireRoles` and never inspect session fields themselves. The guard is
//! a thin adapter over `util::auth::decide`; denial is expressed purely as
//! navigation, never by rendering the wrapped view.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{GuardDecision, LOGIN_ROUTE, UNAUTHORIZED_ROUTE, decide};

/// Wrap a view with session/role access control.
///
/// An empty `roles` list protects by authentication only. The wrapped
/// children are instantiated solely on an allow decision, so a denied view
/// is never mounted, not even for a frame, and a session losing access
/// drops the view in the same update cycle.
#[component]
pub fn RequireRoles(
    /// Roles allowed to view the wrapped route; empty means any
    /// authenticated user.
    #[prop(optional)]
    roles: Vec<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let required = StoredValue::new(roles);

    let navigate = use_navigate();
    Effect::new(move || {
        let decision = required.with_value(|req| decide(&session.get(), req));
        match decision {
            GuardDecision::RedirectLogin => navigate(LOGIN_ROUTE, NavigateOptions::default()),
            GuardDecision::RedirectUnauthorized => {
                navigate(UNAUTHORIZED_ROUTE, NavigateOptions::default());
            }
            GuardDecision::Loading | GuardDecision::Render => {}
        }
    });

    view! {
        {move || {
            let decision = required.with_value(|req| decide(&session.get(), req));
            match render_gate(decision, || children()) {
                Some(view) => view,
                None => guard_placeholder(decision),
            }
        }}
    }
}

/// Instantiate `render` only when `decision` allows it.
pub(crate) fn render_gate<T>(decision: GuardDecision, render: impl FnOnce() -> T) -> Option<T> {
    decision.allows_render().then(render)
}

fn guard_placeholder(decision: GuardDecision) -> AnyView {
    let label = if decision == GuardDecision::Loading {
        "Cargando..."
    } else {
        "Redirigiendo..."
    };
    view! {
        <div class="route-guard__placeholder">
            <p>{label}</p>
        </div>
    }
    .into_any()
}
