//! Signup endpoint.
//!
//! Placeholder until the identity service's registration endpoint exists:
//! input is validated but no account is created and no session is issued, so
//! the caller still has to log in afterwards.

use axum::{http::StatusCode, response::IntoResponse, Json};

use super::{
    types::{AuthResponse, CredentialsRequest},
    utils::{normalize_email, valid_email},
};

#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Signup accepted", body = AuthResponse),
        (status = 400, description = "Validation error", body = AuthResponse)
    ),
    tag = "auth"
)]
pub async fn signup(payload: Option<Json<CredentialsRequest>>) -> impl IntoResponse {
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

    if request.password.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Password is required")),
        )
            .into_response();
    }

    (StatusCode::OK, Json(AuthResponse::ok())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::body::to_bytes;
    use axum::http::header::SET_COOKIE;

    #[tokio::test]
    async fn signup_missing_payload() {
        let response = signup(None).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn signup_rejects_malformed_email() {
        let response = signup(Some(Json(CredentialsRequest {
            email: "nope".to_string(),
            password: "123456".to_string(),
        })))
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn signup_rejects_blank_password() {
        let response = signup(Some(Json(CredentialsRequest {
            email: "new@example.com".to_string(),
            password: "   ".to_string(),
        })))
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn signup_accepts_without_issuing_a_session() -> Result<()> {
        let response = signup(Some(Json(CredentialsRequest {
            email: "new@example.com".to_string(),
            password: "123456".to_string(),
        })))
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(SET_COOKIE).is_none());

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let parsed: AuthResponse = serde_json::from_slice(&body)?;
        assert!(parsed.success);
        Ok(())
    }
}
