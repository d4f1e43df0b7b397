//! In-memory session and pending-authorization state.
//!
//! The service persists nothing beyond the cookie-backed token, so both maps
//! are process-local. Only token hashes are used as keys; raw tokens never
//! reach this module.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::validate::UserIdentity;

/// Data returned for a valid session cookie.
#[derive(Clone, Debug)]
pub(crate) struct SessionRecord {
    pub(crate) name: String,
    pub(crate) email: String,
    created_at: Instant,
}

pub(crate) struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<Vec<u8>, SessionRecord>>,
}

impl SessionStore {
    pub(super) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Store a session under the token hash.
    pub(super) async fn insert(&self, token_hash: Vec<u8>, identity: UserIdentity) {
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, record| record.created_at.elapsed() < self.ttl);
        sessions.insert(
            token_hash,
            SessionRecord {
                name: identity.name,
                email: identity.email,
                created_at: Instant::now(),
            },
        );
    }

    /// Resolve a session for a request. Expired entries read as absent.
    pub(crate) async fn lookup(&self, token_hash: &[u8]) -> Option<SessionRecord> {
        let mut sessions = self.sessions.lock().await;
        if let Some(record) = sessions.get(token_hash) {
            if record.created_at.elapsed() < self.ttl {
                return Some(record.clone());
            }
            sessions.remove(token_hash);
        }
        None
    }

    /// Destroy a session. Idempotent.
    pub(super) async fn remove(&self, token_hash: &[u8]) {
        self.sessions.lock().await.remove(token_hash);
    }
}

/// Single-use anti-forgery states for the OAuth authorize/callback pair.
pub(crate) struct PendingAuthorizations {
    ttl: Duration,
    states: Mutex<HashMap<String, Instant>>,
}

impl PendingAuthorizations {
    pub(super) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Issue a fresh state value for an authorize redirect.
    pub(super) async fn issue(&self) -> String {
        let state = Uuid::new_v4().to_string();
        let mut states = self.states.lock().await;
        states.retain(|_, created_at| created_at.elapsed() < self.ttl);
        states.insert(state.clone(), Instant::now());
        state
    }

    /// Consume a state echoed back by the provider; valid at most once.
    pub(super) async fn take(&self, state: &str) -> bool {
        let mut states = self.states.lock().await;
        match states.remove(state) {
            Some(created_at) => created_at.elapsed() < self.ttl,
            None => false,
        }
    }
}
