//! Session gate: the one place that decides what a stored credential is worth.
//! Pure and deterministic, so guards re-evaluate it on every pass instead of
//! caching a stale verdict.

use super::session::{Credential, Role};

/// What the current credential entitles the visitor to see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessLevel {
    Anonymous,
    Standard,
    Privileged,
}

impl AccessLevel {
    /// True for any authenticated session.
    pub fn is_authenticated(self) -> bool {
        !matches!(self, AccessLevel::Anonymous)
    }

    pub fn is_privileged(self) -> bool {
        matches!(self, AccessLevel::Privileged)
    }
}

/// Classifies a credential. No token means anonymous regardless of the
/// privilege flag; with a token the flag picks Standard or Privileged.
pub fn classify(credential: &Credential) -> AccessLevel {
    match (&credential.token, credential.role) {
        (None, _) => AccessLevel::Anonymous,
        (Some(_), Role::Privileged) => AccessLevel::Privileged,
        (Some(_), Role::Standard) => AccessLevel::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, AccessLevel};
    use crate::features::auth::session::{Credential, Role};

    #[test]
    fn no_token_is_anonymous_even_with_privilege_flag() {
        let credential = Credential {
            token: None,
            role: Role::Privileged,
            identity: Some("a@b.com".to_string()),
        };
        assert_eq!(classify(&credential), AccessLevel::Anonymous);
    }

    #[test]
    fn token_with_standard_role_is_standard() {
        let credential = Credential::authenticated(
            "T1".to_string(),
            Role::Standard,
            "a@b.com".to_string(),
        );
        assert_eq!(classify(&credential), AccessLevel::Standard);
    }

    #[test]
    fn token_with_privileged_role_is_privileged() {
        let credential = Credential::authenticated(
            "T1".to_string(),
            Role::Privileged,
            "a@b.com".to_string(),
        );
        assert_eq!(classify(&credential), AccessLevel::Privileged);
    }

    #[test]
    fn token_without_identity_still_authenticates() {
        let credential = Credential {
            token: Some("T1".to_string()),
            role: Role::Standard,
            identity: None,
        };
        assert_eq!(classify(&credential), AccessLevel::Standard);
    }

    #[test]
    fn privileged_implies_authenticated() {
        for credential in [
            Credential::default(),
            Credential::authenticated("T1".to_string(), Role::Standard, "a@b.com".to_string()),
            Credential::authenticated("T1".to_string(), Role::Privileged, "a@b.com".to_string()),
        ] {
            let level = classify(&credential);
            if level.is_privileged() {
                assert!(level.is_authenticated());
            }
        }
    }
}
