//! # Anteroom (Session-Gated Authentication Portal)
//!
//! `anteroom` is a small authentication authority: email/password and OAuth
//! login, a cookie-backed session, and a session-gated dashboard served by the
//! companion web frontend.
//!
//! ## Authentication
//!
//! Password checking is a stub against a single known-valid identity and is
//! the designated seam for an external identity service. Failures are always
//! reported as the generic `Invalid credentials`; the API never reveals
//! whether the account or the password was wrong.
//!
//! ## Sessions
//!
//! A successful login issues a random 32-byte token delivered as an
//! `HttpOnly` cookie. Only the SHA-256 hash of the token is kept server-side,
//! mapped to the user's identity with a TTL. Logout removes the record and
//! clears the cookie; an expired or removed session is indistinguishable from
//! no session at all.
//!
//! ## Protected resources
//!
//! `GET /api/session` is the only source of user-identifying content. It
//! resolves the cookie before building any payload and answers
//! `204 No Content` for anonymous callers, so protected data never leaves the
//! service without a live session.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        // Should be a hex string (full SHA-1 is 40 chars, but could be short)
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
