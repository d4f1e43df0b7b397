//! Auth state and configuration.

use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;

use super::rate_limit::RateLimiter;
use super::store::{PendingAuthorizations, SessionStore};

const DEFAULT_SESSION_TTL_SECONDS: i64 = 12 * 60 * 60;
const OAUTH_STATE_TTL: Duration = Duration::from_secs(10 * 60);

const DEFAULT_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Identity-provider settings for the OAuth sign-in path.
#[derive(Clone, Debug)]
pub struct OauthConfig {
    client_id: String,
    client_secret: SecretString,
    redirect_url: String,
    authorize_url: String,
    token_url: String,
    userinfo_url: String,
}

impl OauthConfig {
    #[must_use]
    pub fn new(client_id: String, client_secret: SecretString, redirect_url: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_url,
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            userinfo_url: DEFAULT_USERINFO_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_authorize_url(mut self, url: String) -> Self {
        self.authorize_url = url;
        self
    }

    #[must_use]
    pub fn with_token_url(mut self, url: String) -> Self {
        self.token_url = url;
        self
    }

    #[must_use]
    pub fn with_userinfo_url(mut self, url: String) -> Self {
        self.userinfo_url = url;
        self
    }

    pub(super) fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(super) fn client_secret(&self) -> &SecretString {
        &self.client_secret
    }

    pub(super) fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    pub(super) fn authorize_url(&self) -> &str {
        &self.authorize_url
    }

    pub(super) fn token_url(&self) -> &str {
        &self.token_url
    }

    pub(super) fn userinfo_url(&self) -> &str {
        &self.userinfo_url
    }
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    frontend_base_url: String,
    session_ttl_seconds: i64,
    oauth: Option<OauthConfig>,
}

impl AuthConfig {
    #[must_use]
    pub fn new(frontend_base_url: String) -> Self {
        Self {
            frontend_base_url,
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            oauth: None,
        }
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_oauth(mut self, oauth: OauthConfig) -> Self {
        self.oauth = Some(oauth);
        self
    }

    pub(crate) fn frontend_base_url(&self) -> &str {
        &self.frontend_base_url
    }

    pub(super) fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    pub(super) fn session_cookie_secure(&self) -> bool {
        self.frontend_base_url.starts_with("https://")
    }

    pub(super) fn oauth(&self) -> Option<&OauthConfig> {
        self.oauth.as_ref()
    }
}

pub struct AuthState {
    config: AuthConfig,
    sessions: SessionStore,
    pending: PendingAuthorizations,
    rate_limiter: Arc<dyn RateLimiter>,
    http: reqwest::Client,
}

impl AuthState {
    #[must_use]
    pub fn new(
        config: AuthConfig,
        rate_limiter: Arc<dyn RateLimiter>,
        http: reqwest::Client,
    ) -> Self {
        let ttl = Duration::from_secs(u64::try_from(config.session_ttl_seconds()).unwrap_or(0));
        Self {
            sessions: SessionStore::new(ttl),
            pending: PendingAuthorizations::new(OAUTH_STATE_TTL),
            config,
            rate_limiter,
            http,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub(crate) fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub(super) fn pending_authorizations(&self) -> &PendingAuthorizations {
        &self.pending
    }

    pub(super) fn rate_limiter(&self) -> &dyn RateLimiter {
        self.rate_limiter.as_ref()
    }

    pub(super) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
