//! Local login-form checks, run before any network call.

/// Matches the server's address shape: one `@`, no whitespace, and a dot
/// somewhere in the domain part.
pub fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

/// First failed check wins; `Ok` means the form may be submitted.
pub fn check_login_inputs(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Email and password are required.".to_string());
    }
    if !is_well_formed_email(email.trim()) {
        return Err("Enter a valid email address.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_login_inputs, is_well_formed_email};

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_well_formed_email("admin@example.com"));
        assert!(is_well_formed_email("a.b+c@mail.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_well_formed_email("admin"));
        assert!(!is_well_formed_email("admin@example"));
        assert!(!is_well_formed_email("@example.com"));
        assert!(!is_well_formed_email("admin@"));
        assert!(!is_well_formed_email("ad min@example.com"));
        assert!(!is_well_formed_email("admin@exa mple.com"));
        assert!(!is_well_formed_email("admin@example..com"));
        assert!(!is_well_formed_email("a@b@example.com"));
    }

    #[test]
    fn requires_both_fields() {
        assert!(check_login_inputs("", "secret").is_err());
        assert!(check_login_inputs("admin@example.com", "").is_err());
        assert!(check_login_inputs("  ", "secret").is_err());
    }

    #[test]
    fn rejects_bad_email_before_submitting() {
        let err = check_login_inputs("not-an-email", "secret").unwrap_err();
        assert_eq!(err, "Enter a valid email address.");
    }

    #[test]
    fn passes_complete_inputs() {
        assert!(check_login_inputs("admin@example.com", "secret").is_ok());
    }
}
