//! Shared frontend utilities for API access, configuration, and errors.
//!
//! All requests to the anteroom API go through the helpers in [`api`]; they
//! attach cookies for session-authenticated calls and enforce a predictable
//! timeout so a hung request surfaces as a visible error instead of wedging a
//! form in its submitting state.

pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{
    endpoint_url, get_optional_json_with_credentials, post_empty_with_credentials,
    post_json_with_credentials,
};
pub(crate) use errors::AppError;
