//! OAuth sign-in: authorize redirect and provider callback.
//!
//! The provider integration covers the authorization-code flow only: build
//! the authorize URL, exchange the code, read name and email from userinfo.
//! Anything that goes wrong sends the browser back to the login page without
//! detail.

use anyhow::{Context, Result};
use axum::{
    extract::{Extension, Query},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, warn};
use url::Url;

use super::{
    session::issue_session,
    state::{AuthState, OauthConfig},
    types::OauthCallbackQuery,
    validate::UserIdentity,
};

#[utoipa::path(
    get,
    path = "/api/oauth/google",
    responses(
        (status = 303, description = "Redirect to the identity provider"),
        (status = 503, description = "OAuth is not configured")
    ),
    tag = "auth"
)]
pub async fn oauth_authorize(auth_state: Extension<Arc<AuthState>>) -> impl IntoResponse {
    let Some(oauth) = auth_state.config().oauth() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "OAuth is not configured").into_response();
    };

    let state = auth_state.pending_authorizations().issue().await;
    match authorize_url(oauth, &state) {
        Ok(url) => Redirect::to(url.as_str()).into_response(),
        Err(err) => {
            error!("Failed to build authorize URL: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/oauth/google/callback",
    params(OauthCallbackQuery),
    responses(
        (status = 303, description = "Redirect to the frontend"),
        (status = 503, description = "OAuth is not configured")
    ),
    tag = "auth"
)]
pub async fn oauth_callback(
    Query(query): Query<OauthCallbackQuery>,
    auth_state: Extension<Arc<AuthState>>,
) -> impl IntoResponse {
    let Some(oauth) = auth_state.config().oauth() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "OAuth is not configured").into_response();
    };

    if let Some(provider_error) = query.error {
        warn!("Identity provider returned an error: {provider_error}");
        return failure_redirect(&auth_state);
    }

    let (Some(code), Some(state)) = (query.code, query.state) else {
        warn!("Callback missing code or state");
        return failure_redirect(&auth_state);
    };

    // The state must match one we issued, and only once.
    if !auth_state.pending_authorizations().take(&state).await {
        warn!("Callback with unknown or reused state");
        return failure_redirect(&auth_state);
    }

    let identity = match fetch_identity(auth_state.http(), oauth, &code).await {
        Ok(identity) => identity,
        Err(err) => {
            error!("OAuth code exchange failed: {err}");
            return failure_redirect(&auth_state);
        }
    };

    match issue_session(&auth_state, identity).await {
        Ok(cookie) => {
            let mut response_headers = HeaderMap::new();
            response_headers.insert(SET_COOKIE, cookie);
            let url = frontend_url(&auth_state, "/dashboard");
            (response_headers, Redirect::to(&url)).into_response()
        }
        Err(err) => {
            error!("Failed to issue session: {err}");
            failure_redirect(&auth_state)
        }
    }
}

fn authorize_url(oauth: &OauthConfig, state: &str) -> Result<Url> {
    let mut url = Url::parse(oauth.authorize_url())
        .with_context(|| format!("Invalid authorize URL: {}", oauth.authorize_url()))?;
    url.query_pairs_mut()
        .append_pair("client_id", oauth.client_id())
        .append_pair("redirect_uri", oauth.redirect_url())
        .append_pair("response_type", "code")
        .append_pair("scope", "openid email profile")
        .append_pair("prompt", "select_account consent")
        .append_pair("state", state);
    Ok(url)
}

fn frontend_url(auth_state: &AuthState, path: &str) -> String {
    let base = auth_state.config().frontend_base_url().trim_end_matches('/');
    format!("{base}{path}")
}

fn failure_redirect(auth_state: &AuthState) -> Response {
    // No session, no detail; the login page shows a generic message.
    Redirect::to(&frontend_url(auth_state, "/login?error=oauth")).into_response()
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    name: Option<String>,
    email: Option<String>,
}

/// Exchange the authorization code and resolve the user's identity.
async fn fetch_identity(
    http: &reqwest::Client,
    oauth: &OauthConfig,
    code: &str,
) -> Result<UserIdentity> {
    let token: TokenResponse = http
        .post(oauth.token_url())
        .form(&[
            ("client_id", oauth.client_id()),
            ("client_secret", oauth.client_secret().expose_secret()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", oauth.redirect_url()),
        ])
        .send()
        .await
        .context("token request failed")?
        .error_for_status()
        .context("token endpoint rejected the code")?
        .json()
        .await
        .context("invalid token response")?;

    let info: UserInfoResponse = http
        .get(oauth.userinfo_url())
        .bearer_auth(&token.access_token)
        .send()
        .await
        .context("userinfo request failed")?
        .error_for_status()
        .context("userinfo endpoint rejected the token")?
        .json()
        .await
        .context("invalid userinfo response")?;

    let email = info.email.context("userinfo response missing email")?;
    let name = info.name.unwrap_or_else(|| email.clone());
    Ok(UserIdentity { name, email })
}
