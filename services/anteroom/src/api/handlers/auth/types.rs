//! Request/response types for auth endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Uniform envelope returned by login and signup, success or not.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResponse {
    pub(super) fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub(super) fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Session summary for hydrating frontend auth state. Contains no secrets.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    pub name: String,
    pub email: String,
}

/// Query parameters the identity provider appends to the callback redirect.
#[derive(IntoParams, Deserialize, Debug)]
pub struct OauthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}
