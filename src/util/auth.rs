//! Session/authorization flows and guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything route guards and role-aware views need: the pure decision
//! table, role-set queries, and the login/logout/hydration flows that are
//! the only writers of session state and the credential store.
//!
//! DESIGN
//! ======
//! Decisions are computed by pure functions over `SessionState` so the
//! access-control logic tests without any rendering machinery; components
//! are thin adapters over `decide`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{self, AuthError};
use crate::net::types::{LoginResponse, Profile, StoredSession};
use crate::state::session::{SessionState, SessionStatus};
use crate::util::credential_store::CredentialStore;

/// Redirect target for unauthenticated access.
pub const LOGIN_ROUTE: &str = "/login";

/// Redirect target for authenticated-but-insufficient-role access.
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

/// Outcome of evaluating a protected view against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration or a login round trip is pending; show a neutral
    /// placeholder, never a redirect.
    Loading,
    /// No valid session; navigate to [`LOGIN_ROUTE`].
    RedirectLogin,
    /// Authenticated but holding none of the required roles; navigate to
    /// [`UNAUTHORIZED_ROUTE`].
    RedirectUnauthorized,
    /// Access granted; render the wrapped view.
    Render,
}

impl GuardDecision {
    /// Whether the wrapped view may be instantiated.
    #[must_use]
    pub fn allows_render(self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Evaluate the guard decision table for a view requiring `required_roles`.
///
/// An empty requirement means authentication-only protection. Role matching
/// is exact and case-sensitive.
#[must_use]
pub fn decide(state: &SessionState, required_roles: &[String]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    match state.status {
        SessionStatus::Authenticating => GuardDecision::Loading,
        SessionStatus::Unauthenticated | SessionStatus::Expired => GuardDecision::RedirectLogin,
        SessionStatus::Authenticated => {
            if required_roles.is_empty() || roles_intersect(state.roles(), required_roles) {
                GuardDecision::Render
            } else {
                GuardDecision::RedirectUnauthorized
            }
        }
    }
}

/// Whether `roles` and `required` share at least one entry.
///
/// Exact, case-sensitive comparison; an empty `required` set never matches.
#[must_use]
pub fn roles_intersect(roles: &[String], required: &[String]) -> bool {
    required.iter().any(|needed| roles.iter().any(|have| have == needed))
}

/// Whether the live session currently holds `role`.
pub fn has_role(session: RwSignal<SessionState>, role: &str) -> bool {
    session.with(|state| state.roles().iter().any(|have| have == role))
}

/// Whether the live session holds at least one of `roles`.
pub fn has_any_role(session: RwSignal<SessionState>, roles: &[&str]) -> bool {
    session.with(|state| {
        roles
            .iter()
            .any(|needed| state.roles().iter().any(|have| have == needed))
    })
}

/// Read the credential store and settle the session exactly once at startup.
///
/// Must run before any guard settles; guards treat the pre-hydration window
/// as loading, never as unauthenticated.
pub fn hydrate(session: RwSignal<SessionState>, store: &impl CredentialStore, now_ms: i64) {
    session.update(|state| run_hydrate(state, store, now_ms));
}

fn run_hydrate(state: &mut SessionState, store: &impl CredentialStore, now_ms: i64) {
    state.hydrate_from(store.load(), now_ms);
    if state.status == SessionStatus::Expired {
        // The stamp has passed; the record must not resurrect on reload.
        store.clear();
    }
}

/// Perform a login round trip, driving the session through
/// `Authenticating` and into its terminal state.
///
/// The `Authenticating` transition happens synchronously before the network
/// call so guards show a stable loading state during slow logins. A logout
/// issued while the request is in flight wins: the late result is discarded
/// and [`AuthError::Cancelled`] is returned.
///
/// # Errors
///
/// Propagates the classified [`AuthError`] from the API; the session is
/// never left in `Authenticating`.
pub async fn login(
    session: RwSignal<SessionState>,
    store: &impl CredentialStore,
    email: &str,
    password: &str,
) -> Result<Profile, AuthError> {
    let epoch = session.try_update(SessionState::begin_login).unwrap_or(0);
    let outcome = api::login(email, password).await;
    session
        .try_update(|state| apply_login_outcome(state, store, epoch, outcome))
        .unwrap_or(Err(AuthError::Cancelled))
}

fn apply_login_outcome(
    state: &mut SessionState,
    store: &impl CredentialStore,
    epoch: u64,
    outcome: Result<LoginResponse, AuthError>,
) -> Result<Profile, AuthError> {
    match outcome {
        Ok(resp) => {
            let applied =
                state.complete_login(epoch, resp.profile.clone(), resp.token.clone(), resp.roles.clone());
            if applied {
                store.save(&StoredSession {
                    token: resp.token,
                    profile: resp.profile.clone(),
                    roles: resp.roles,
                    expires_at: resp.expires_at,
                });
                Ok(resp.profile)
            } else {
                Err(AuthError::Cancelled)
            }
        }
        Err(err) => {
            state.fail_login(epoch);
            Err(err)
        }
    }
}

/// Log out: clear the session and the persisted record, then notify the
/// server best-effort.
///
/// The local clear happens synchronously so an in-flight login cannot
/// resurrect the session afterwards. Idempotent.
pub fn logout(session: RwSignal<SessionState>, store: &impl CredentialStore) {
    session.update(SessionState::clear);
    store.clear();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        api::logout().await;
    });
}

/// Current wall-clock in milliseconds since the Unix epoch.
///
/// Zero outside the browser; hydration treats that as "no expiry check".
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
