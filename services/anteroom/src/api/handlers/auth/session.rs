//! Session endpoint, logout, and cookie plumbing.

use anyhow::Result;
use axum::{
    extract::Extension,
    http::{
        header::{InvalidHeaderValue, COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use super::{
    state::{AuthConfig, AuthState},
    store::SessionRecord,
    types::SessionResponse,
    utils::{generate_session_token, hash_session_token},
    validate::UserIdentity,
};

const SESSION_COOKIE_NAME: &str = "anteroom_session";

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Session is active", body = SessionResponse),
        (status = 204, description = "No active session")
    ),
    tag = "auth"
)]
pub async fn session(headers: HeaderMap, auth_state: Extension<Arc<AuthState>>) -> impl IntoResponse {
    // The session payload is the only user-identifying content the service
    // serves; it is built strictly after the cookie resolves.
    match authenticate_session(&headers, &auth_state).await {
        Some(record) => (
            StatusCode::OK,
            Json(SessionResponse {
                name: record.name,
                email: record.email,
            }),
        )
            .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Resolve the session cookie into a session record, if present.
///
/// Missing or stale cookies read as "no session"; they are not an error.
pub(crate) async fn authenticate_session(
    headers: &HeaderMap,
    auth_state: &AuthState,
) -> Option<SessionRecord> {
    let token = extract_session_token(headers)?;
    // Only the hash is stored; never compare raw tokens against the store.
    let token_hash = hash_session_token(&token);
    auth_state.sessions().lookup(&token_hash).await
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 204, description = "Session cleared")
    ),
    tag = "auth"
)]
pub async fn logout(headers: HeaderMap, auth_state: Extension<Arc<AuthState>>) -> impl IntoResponse {
    if let Some(token) = extract_session_token(&headers) {
        let token_hash = hash_session_token(&token);
        auth_state.sessions().remove(&token_hash).await;
    }

    // Always clear the cookie, even if the session record was missing.
    let mut response_headers = HeaderMap::new();
    if let Ok(cookie) = clear_session_cookie(auth_state.config()) {
        response_headers.insert(SET_COOKIE, cookie);
    }
    (StatusCode::NO_CONTENT, response_headers).into_response()
}

/// Issue a new session for `identity` and build its `Set-Cookie` value.
pub(super) async fn issue_session(
    auth_state: &AuthState,
    identity: UserIdentity,
) -> Result<HeaderValue> {
    let token = generate_session_token()?;
    auth_state
        .sessions()
        .insert(hash_session_token(&token), identity)
        .await;
    Ok(session_cookie(auth_state.config(), &token)?)
}

/// Build a secure `HttpOnly` cookie for the session token.
pub(super) fn session_cookie(
    config: &AuthConfig,
    token: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let ttl_seconds = config.session_ttl_seconds();
    // Only mark cookies secure when the frontend is served over HTTPS.
    let secure = config.session_cookie_secure();
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_seconds}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

fn clear_session_cookie(config: &AuthConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure = config.session_cookie_secure();
    let mut cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::NoopRateLimiter;
    use super::*;
    use axum::body::to_bytes;

    fn auth_state() -> Arc<AuthState> {
        Arc::new(AuthState::new(
            AuthConfig::new("http://localhost:8080".to_string()),
            Arc::new(NoopRateLimiter),
            reqwest::Client::new(),
        ))
    }

    fn identity() -> UserIdentity {
        UserIdentity {
            name: "Admin".to_string(),
            email: "admin@test.com".to_string(),
        }
    }

    fn cookie_headers(set_cookie: &HeaderValue) -> Result<HeaderMap> {
        let raw = set_cookie.to_str()?;
        let pair = raw
            .split(';')
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty cookie"))?;
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(pair)?);
        Ok(headers)
    }

    #[tokio::test]
    async fn session_without_cookie_is_no_content() {
        let state = auth_state();
        let response = session(HeaderMap::new(), Extension(state))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn issued_session_is_retrievable() -> Result<()> {
        let state = auth_state();
        let set_cookie = issue_session(&state, identity()).await?;
        let headers = cookie_headers(&set_cookie)?;

        let response = session(headers, Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let parsed: SessionResponse = serde_json::from_slice(&body)?;
        assert_eq!(parsed.name, "Admin");
        assert_eq!(parsed.email, "admin@test.com");
        Ok(())
    }

    #[tokio::test]
    async fn logout_destroys_the_session() -> Result<()> {
        let state = auth_state();
        let set_cookie = issue_session(&state, identity()).await?;
        let headers = cookie_headers(&set_cookie)?;

        let response = logout(headers.clone(), Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let cleared = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(cleared.contains("Max-Age=0"));

        // Behaves like a never-authenticated request afterwards.
        let response = session(headers, Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        Ok(())
    }

    #[test]
    fn session_cookie_flags_follow_frontend_scheme() -> Result<()> {
        let http_config = AuthConfig::new("http://localhost:8080".to_string());
        let cookie = session_cookie(&http_config, "token")?;
        let raw = cookie.to_str()?;
        assert!(raw.starts_with("anteroom_session=token"));
        assert!(raw.contains("HttpOnly"));
        assert!(raw.contains("SameSite=Lax"));
        assert!(!raw.contains("Secure"));

        let https_config = AuthConfig::new("https://app.anteroom.dev".to_string());
        let cookie = session_cookie(&https_config, "token")?;
        assert!(cookie.to_str()?.contains("; Secure"));
        Ok(())
    }

    #[test]
    fn extract_session_token_finds_cookie_among_pairs() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; anteroom_session=tok; lang=en"),
        );
        assert_eq!(extract_session_token(&headers), Some("tok".to_string()));

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(extract_session_token(&headers), None);
    }
}
