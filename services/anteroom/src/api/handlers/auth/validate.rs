//! Credential checking against the known-valid identity.

/// Identity attached to a session after a successful authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UserIdentity {
    pub(crate) name: String,
    pub(crate) email: String,
}

const DEMO_NAME: &str = "Admin";
const DEMO_EMAIL: &str = "admin@test.com";
const DEMO_PASSWORD: &str = "123456";

/// Check credentials and return the identity on a match.
///
/// Expects an already-normalized email. Returns `None` for any mismatch;
/// callers must answer with the same generic rejection either way so the
/// response does not reveal which field was wrong.
// TODO: delegate to the identity service once its endpoint is provisioned.
pub(super) fn validate_credentials(email_normalized: &str, password: &str) -> Option<UserIdentity> {
    if email_normalized == DEMO_EMAIL && password == DEMO_PASSWORD {
        return Some(UserIdentity {
            name: DEMO_NAME.to_string(),
            email: DEMO_EMAIL.to_string(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designated_pair_is_accepted() {
        let identity = validate_credentials("admin@test.com", "123456");
        assert_eq!(
            identity,
            Some(UserIdentity {
                name: "Admin".to_string(),
                email: "admin@test.com".to_string(),
            })
        );
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert!(validate_credentials("admin@test.com", "654321").is_none());
    }

    #[test]
    fn unknown_email_is_rejected() {
        assert!(validate_credentials("x@y.com", "123456").is_none());
        assert!(validate_credentials("x@y.com", "wrong").is_none());
    }
}
