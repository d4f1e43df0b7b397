//! Client wrappers for the anteroom auth API. These helpers centralize
//! session-aware requests so route and component code never builds requests
//! by hand.

use crate::app_lib::{
    endpoint_url, get_optional_json_with_credentials, post_empty_with_credentials,
    post_json_with_credentials, AppError,
};
use crate::features::auth::types::{AuthResponse, Credentials, UserSession};

/// Submits email/password credentials; the server sets the session cookie.
pub async fn login(request: &Credentials) -> Result<AuthResponse, AppError> {
    post_json_with_credentials("/api/login", request).await
}

/// Submits a signup request. No session is established on success; the user
/// still logs in afterwards.
pub async fn signup(request: &Credentials) -> Result<AuthResponse, AppError> {
    post_json_with_credentials("/api/signup", request).await
}

/// Fetches the current session, if any, for hydrating auth state.
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    get_optional_json_with_credentials("/api/session").await
}

/// Clears the session server-side and lets the server expire the cookie.
pub async fn logout() -> Result<(), AppError> {
    post_empty_with_credentials("/api/logout").await
}

/// Absolute URL of the provider-based sign-in entry point. Navigating here
/// leaves the app and returns via the provider's redirect chain.
pub fn oauth_authorize_url() -> String {
    endpoint_url("/api/oauth/google")
}
