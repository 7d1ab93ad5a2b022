//! Wire and persisted DTOs for the auth boundary.
//!
//! DESIGN
//! ======
//! These types mirror the login endpoint payload and the persisted session
//! record one-to-one so serde round-trips stay lossless between the API,
//! localStorage, and in-memory session state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity attributes for the signed-in user.
///
/// Replaced wholesale on every login; never partially mutated. Roles travel
/// beside the profile rather than inside it, matching the persisted layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique user identifier.
    pub id: String,
    /// Name shown in the navbar and greetings.
    pub display_name: String,
    /// Login email.
    pub email: String,
}

/// Response payload from `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token.
    pub token: String,
    /// Identity of the authenticated user.
    pub profile: Profile,
    /// Role tags granted to the user (e.g. `"admin"`, `"Mecanico"`).
    #[serde(default)]
    pub roles: Vec<String>,
    /// Session expiry in milliseconds since the Unix epoch, when the API
    /// reports one.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// The session record persisted under the credential-store key.
///
/// Absence or parse failure of this record is treated identically to
/// "no session".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Opaque session token.
    pub token: String,
    /// Identity of the authenticated user.
    pub profile: Profile,
    /// Role tags granted to the user.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiry stamp in milliseconds since the Unix epoch; `None` skips the
    /// client-side expiry check at hydration.
    #[serde(default)]
    pub expires_at: Option<i64>,
}
