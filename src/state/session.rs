//! Session state for the signed-in fleet user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single source of truth for authentication status, consumed by the
//! route guard and every role-aware component via a `RwSignal` context.
//! All mutations go through the transition methods below so observers never
//! see a half-updated session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Profile, StoredSession};

/// Authentication lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No session: fresh start, failed login, or after logout.
    #[default]
    Unauthenticated,
    /// A login round trip is in flight.
    Authenticating,
    /// A valid session is active; `token` and `user` are both present.
    Authenticated,
    /// A persisted session was found but its expiry stamp has passed.
    Expired,
}

/// Process-wide session state.
///
/// `loading` covers the pre-hydration window: guards must treat it as a
/// suspended state rather than `Unauthenticated` so a page reload never
/// flash-redirects to login. `login_epoch` fences concurrent login/logout:
/// `clear` bumps it, so a login that resolves after a logout is discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub token: Option<String>,
    pub user: Option<Profile>,
    roles: Vec<String>,
    pub loading: bool,
    login_epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            token: None,
            user: None,
            roles: Vec::new(),
            loading: true,
            login_epoch: 0,
        }
    }
}

impl SessionState {
    /// Whether a valid session is currently active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Current role set; empty unless authenticated.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        if self.is_authenticated() { &self.roles } else { &[] }
    }

    /// Enter the authenticated state with a fresh profile, token, and roles.
    pub fn set_authenticated(&mut self, user: Profile, token: String, roles: Vec<String>) {
        self.status = SessionStatus::Authenticated;
        self.user = Some(user);
        self.token = Some(token);
        self.roles = roles;
        self.loading = false;
    }

    /// Drop all authentication data and invalidate any in-flight login.
    ///
    /// Idempotent; safe to call when already unauthenticated.
    pub fn clear(&mut self) {
        self.status = SessionStatus::Unauthenticated;
        self.token = None;
        self.user = None;
        self.roles.clear();
        self.loading = false;
        self.login_epoch += 1;
    }

    /// Start a login attempt, returning the epoch that must be presented to
    /// [`Self::complete_login`] or [`Self::fail_login`].
    pub fn begin_login(&mut self) -> u64 {
        self.status = SessionStatus::Authenticating;
        self.login_epoch += 1;
        self.login_epoch
    }

    /// Apply a successful login outcome.
    ///
    /// Returns `false` without touching state when `epoch` is stale, i.e. a
    /// logout or newer login attempt happened while the request was in
    /// flight.
    pub fn complete_login(&mut self, epoch: u64, user: Profile, token: String, roles: Vec<String>) -> bool {
        if epoch != self.login_epoch {
            return false;
        }
        self.set_authenticated(user, token, roles);
        true
    }

    /// Apply a failed login outcome, reverting to `Unauthenticated`.
    ///
    /// Returns `false` without touching state when `epoch` is stale.
    pub fn fail_login(&mut self, epoch: u64) -> bool {
        if epoch != self.login_epoch {
            return false;
        }
        self.status = SessionStatus::Unauthenticated;
        self.token = None;
        self.user = None;
        self.roles.clear();
        self.loading = false;
        true
    }

    /// Apply the persisted record read at startup and end the loading window.
    ///
    /// A structurally valid record authenticates; an absent record leaves the
    /// session unauthenticated; a record whose `expires_at` stamp lies at or
    /// before `now_ms` yields [`SessionStatus::Expired`] with no credentials
    /// retained.
    pub fn hydrate_from(&mut self, record: Option<StoredSession>, now_ms: i64) {
        match record {
            Some(record) if record.token.is_empty() => {
                self.status = SessionStatus::Unauthenticated;
            }
            Some(record) => {
                if record.expires_at.is_some_and(|stamp| stamp <= now_ms) {
                    self.status = SessionStatus::Expired;
                    self.token = None;
                    self.user = None;
                    self.roles.clear();
                } else {
                    self.status = SessionStatus::Authenticated;
                    self.user = Some(record.profile);
                    self.token = Some(record.token);
                    self.roles = record.roles;
                }
            }
            None => {
                self.status = SessionStatus::Unauthenticated;
            }
        }
        self.loading = false;
    }
}
