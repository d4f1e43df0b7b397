pub mod auth;
pub mod health;

use axum::response::IntoResponse;

// Plain banner for `/`; not part of the documented API.
pub async fn root() -> impl IntoResponse {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
}
