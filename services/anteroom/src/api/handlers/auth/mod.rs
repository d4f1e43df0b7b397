//! Auth handlers and supporting modules.
//!
//! This module coordinates credential checking, session management, and the
//! OAuth redirect flow.
//!
//! ## Sessions
//!
//! Session tokens are random 32-byte values delivered as an `HttpOnly`
//! cookie. The store keeps only SHA-256 hashes of tokens, mapped to the
//! user's identity with a TTL; logout deletes the record and clears the
//! cookie.
//!
//! ## Rate Limiting
//!
//! `POST /api/login` is limited per client IP and per email through the
//! [`RateLimiter`] trait. The default is a fixed window of 10 attempts per
//! 60 seconds; tests swap in [`NoopRateLimiter`].

pub(crate) mod login;
pub(crate) mod oauth;
mod rate_limit;
pub(crate) mod session;
pub(crate) mod signup;
mod state;
mod store;
pub(crate) mod types;
mod utils;
mod validate;

pub use rate_limit::{
    FixedWindowRateLimiter, NoopRateLimiter, RateLimitAction, RateLimitDecision, RateLimiter,
};
pub use state::{AuthConfig, AuthState, OauthConfig};
