//! Email/password login endpoint.

use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::error;

use super::{
    rate_limit::{RateLimitAction, RateLimitDecision},
    session::issue_session,
    state::AuthState,
    types::{AuthResponse, CredentialsRequest},
    utils::{extract_client_ip, normalize_email, valid_email},
    validate::validate_credentials,
};

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Session established", body = AuthResponse),
        (status = 400, description = "Validation error", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = AuthResponse),
        (status = 429, description = "Rate limited", body = AuthResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    headers: HeaderMap,
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<CredentialsRequest>>,
) -> impl IntoResponse {
    let Some(Json(request)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Missing payload")),
        )
            .into_response();
    };

    let email = normalize_email(&request.email);
    if !valid_email(&email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Invalid email")),
        )
            .into_response();
    }

    // Rate-limit before touching credentials to keep abuse cheap to reject.
    let client_ip = extract_client_ip(&headers);
    if auth_state
        .rate_limiter()
        .check_ip(client_ip.as_deref(), RateLimitAction::Login)
        == RateLimitDecision::Limited
        || auth_state
            .rate_limiter()
            .check_email(&email, RateLimitAction::Login)
            == RateLimitDecision::Limited
    {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(AuthResponse::failure("Too many attempts, try again later")),
        )
            .into_response();
    }

    // Same generic rejection for unknown account and wrong password.
    let Some(identity) = validate_credentials(&email, &request.password) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(AuthResponse::failure("Invalid credentials")),
        )
            .into_response();
    };

    match issue_session(&auth_state, identity).await {
        Ok(cookie) => {
            let mut response_headers = HeaderMap::new();
            response_headers.insert(SET_COOKIE, cookie);
            (StatusCode::OK, response_headers, Json(AuthResponse::ok())).into_response()
        }
        Err(err) => {
            error!("Failed to issue session: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuthResponse::failure("Internal error")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{
        session::{authenticate_session, session},
        AuthConfig, FixedWindowRateLimiter, NoopRateLimiter,
    };
    use super::*;
    use anyhow::{Context, Result};
    use axum::body::to_bytes;
    use axum::http::header::COOKIE;
    use axum::http::HeaderValue;
    use std::time::Duration;

    fn auth_state() -> Arc<AuthState> {
        Arc::new(AuthState::new(
            AuthConfig::new("http://localhost:8080".to_string()),
            Arc::new(NoopRateLimiter),
            reqwest::Client::new(),
        ))
    }

    fn credentials(email: &str, password: &str) -> Option<Json<CredentialsRequest>> {
        Some(Json(CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        }))
    }

    async fn response_body(response: axum::response::Response) -> Result<AuthResponse> {
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    #[tokio::test]
    async fn login_missing_payload() {
        let response = login(HeaderMap::new(), Extension(auth_state()), None)
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_rejects_malformed_email() -> Result<()> {
        let response = login(
            HeaderMap::new(),
            Extension(auth_state()),
            credentials("not-an-email", "123456"),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_body(response).await?;
        assert!(!body.success);
        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_unknown_credentials_generically() -> Result<()> {
        let response = login(
            HeaderMap::new(),
            Extension(auth_state()),
            credentials("x@y.com", "wrong"),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = response_body(response).await?;
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Invalid credentials"));
        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_with_same_message() -> Result<()> {
        let response = login(
            HeaderMap::new(),
            Extension(auth_state()),
            credentials("admin@test.com", "wrong"),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = response_body(response).await?;
        assert_eq!(body.error.as_deref(), Some("Invalid credentials"));
        Ok(())
    }

    #[tokio::test]
    async fn login_issues_a_retrievable_session() -> Result<()> {
        let state = auth_state();
        let response = login(
            HeaderMap::new(),
            Extension(state.clone()),
            credentials(" Admin@Test.com ", "123456"),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(SET_COOKIE)
            .context("missing Set-Cookie")?
            .to_str()?
            .to_string();
        let pair = set_cookie.split(';').next().context("empty cookie")?;

        let body = response_body(response).await?;
        assert!(body.success);
        assert!(body.error.is_none());

        // The session is retrievable immediately after.
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(pair)?);
        let record = authenticate_session(&headers, &state)
            .await
            .context("session not found")?;
        assert_eq!(record.name, "Admin");
        assert_eq!(record.email, "admin@test.com");

        let response = session(headers, Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn login_applies_the_rate_limit() -> Result<()> {
        let state = Arc::new(AuthState::new(
            AuthConfig::new("http://localhost:8080".to_string()),
            Arc::new(FixedWindowRateLimiter::new(Duration::from_secs(60), 1)),
            reqwest::Client::new(),
        ));

        let response = login(
            HeaderMap::new(),
            Extension(state.clone()),
            credentials("x@y.com", "wrong"),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = login(
            HeaderMap::new(),
            Extension(state),
            credentials("x@y.com", "wrong"),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        Ok(())
    }
}
