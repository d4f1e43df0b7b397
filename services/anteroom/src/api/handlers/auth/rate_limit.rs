//! Rate limiting primitives for auth flows.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub enum RateLimitAction {
    Login,
    Signup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed,
    Limited,
}

pub trait RateLimiter: Send + Sync {
    fn check_ip(&self, ip: Option<&str>, action: RateLimitAction) -> RateLimitDecision;
    fn check_email(&self, email: &str, action: RateLimitAction) -> RateLimitDecision;
}

#[derive(Clone, Debug)]
pub struct NoopRateLimiter;

impl RateLimiter for NoopRateLimiter {
    fn check_ip(&self, _ip: Option<&str>, _action: RateLimitAction) -> RateLimitDecision {
        RateLimitDecision::Allowed
    }

    fn check_email(&self, _email: &str, _action: RateLimitAction) -> RateLimitDecision {
        RateLimitDecision::Allowed
    }
}

/// Fixed-window counters keyed by action + caller identity.
pub struct FixedWindowRateLimiter {
    window: Duration,
    max_attempts: u32,
    counters: Mutex<HashMap<String, Window>>,
}

#[derive(Clone, Copy, Debug)]
struct Window {
    started: Instant,
    attempts: u32,
}

impl FixedWindowRateLimiter {
    #[must_use]
    pub fn new(window: Duration, max_attempts: u32) -> Self {
        Self {
            window,
            max_attempts,
            counters: Mutex::new(HashMap::new()),
        }
    }

    fn check(&self, key: String) -> RateLimitDecision {
        let mut counters = match self.counters.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let now = Instant::now();
        counters.retain(|_, window| now.duration_since(window.started) < self.window);

        let window = counters.entry(key).or_insert(Window {
            started: now,
            attempts: 0,
        });
        if window.attempts >= self.max_attempts {
            return RateLimitDecision::Limited;
        }
        window.attempts += 1;
        RateLimitDecision::Allowed
    }
}

impl Default for FixedWindowRateLimiter {
    fn default() -> Self {
        Self::new(Duration::from_secs(60), 10)
    }
}

impl RateLimiter for FixedWindowRateLimiter {
    fn check_ip(&self, ip: Option<&str>, action: RateLimitAction) -> RateLimitDecision {
        // Without a usable client address there is nothing to key on.
        match ip {
            Some(ip) => self.check(format!("{action:?}:ip:{ip}")),
            None => RateLimitDecision::Allowed,
        }
    }

    fn check_email(&self, email: &str, action: RateLimitAction) -> RateLimitDecision {
        self.check(format!("{action:?}:email:{email}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_rate_limiter_allows() {
        let limiter = NoopRateLimiter;
        assert_eq!(
            limiter.check_ip(None, RateLimitAction::Signup),
            RateLimitDecision::Allowed
        );
        assert_eq!(
            limiter.check_email("user@example.com", RateLimitAction::Login),
            RateLimitDecision::Allowed
        );
    }

    #[test]
    fn fixed_window_limits_after_max_attempts() {
        let limiter = FixedWindowRateLimiter::new(Duration::from_secs(60), 2);
        assert_eq!(
            limiter.check_email("user@example.com", RateLimitAction::Login),
            RateLimitDecision::Allowed
        );
        assert_eq!(
            limiter.check_email("user@example.com", RateLimitAction::Login),
            RateLimitDecision::Allowed
        );
        assert_eq!(
            limiter.check_email("user@example.com", RateLimitAction::Login),
            RateLimitDecision::Limited
        );
    }

    #[test]
    fn fixed_window_keys_are_independent() {
        let limiter = FixedWindowRateLimiter::new(Duration::from_secs(60), 1);
        assert_eq!(
            limiter.check_email("a@example.com", RateLimitAction::Login),
            RateLimitDecision::Allowed
        );
        assert_eq!(
            limiter.check_email("b@example.com", RateLimitAction::Login),
            RateLimitDecision::Allowed
        );
        // Same email under a different action counts separately.
        assert_eq!(
            limiter.check_email("a@example.com", RateLimitAction::Signup),
            RateLimitDecision::Allowed
        );
    }

    #[test]
    fn missing_ip_is_not_limited() {
        let limiter = FixedWindowRateLimiter::new(Duration::from_secs(60), 1);
        for _ in 0..5 {
            assert_eq!(
                limiter.check_ip(None, RateLimitAction::Login),
                RateLimitDecision::Allowed
            );
        }
    }
}
