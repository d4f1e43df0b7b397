//! Request and response types for auth API calls. Passwords pass through
//! these payloads, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Envelope returned by login and signup, success or not.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Session summary returned by the API to hydrate auth state.
/// This mirrors cookie-backed session state and contains no secrets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSession {
    pub name: String,
    pub email: String,
}
