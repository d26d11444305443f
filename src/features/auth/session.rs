//! Durable credential state. Three localStorage entries (token, privilege
//! flag, display identity) form the single source of truth for "who is logged
//! in" across views and full page reloads. The auth workflow is the only
//! writer; everything else reads through the session gate. All three entries
//! are written in one synchronous pass and cleared in one synchronous pass, so
//! no reader ever observes a half-updated credential.

const KEY_TOKEN: &str = "job_admin.token";
const KEY_IS_ADMIN: &str = "job_admin.is_admin";
const KEY_EMAIL: &str = "job_admin.email";

/// Privilege level carried by a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Standard,
    Privileged,
}

impl Role {
    /// Maps the persisted flag back to a role; anything but "true" is Standard.
    fn from_flag(flag: Option<String>) -> Self {
        match flag.as_deref() {
            Some("true") => Role::Privileged,
            _ => Role::Standard,
        }
    }

    fn as_flag(self) -> &'static str {
        match self {
            Role::Privileged => "true",
            Role::Standard => "false",
        }
    }
}

/// Locally persisted proof of an authenticated session.
///
/// A valid session carries both a token and an identity; the gate only looks
/// at the token, tolerating an identity-less credential the way the original
/// system did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credential {
    pub token: Option<String>,
    pub role: Role,
    pub identity: Option<String>,
}

impl Credential {
    pub fn authenticated(token: String, role: Role, identity: String) -> Self {
        Self {
            token: Some(token),
            role,
            identity: Some(identity),
        }
    }
}

/// Read/write/clear contract over the persisted credential entries.
///
/// No network and no validation happen here. On wasm this is backed by
/// `window.localStorage`; on native targets an in-process map backs the same
/// contract so the store semantics hold off-browser too.
pub struct SessionStore;

impl SessionStore {
    /// Returns the current credential, defaulting every absent field.
    /// A blank token counts as absent.
    pub fn read() -> Credential {
        Credential {
            token: storage_get(KEY_TOKEN).filter(|token| !token.trim().is_empty()),
            role: Role::from_flag(storage_get(KEY_IS_ADMIN)),
            identity: storage_get(KEY_EMAIL),
        }
    }

    /// Persists all three fields together.
    pub fn write(credential: &Credential) {
        match &credential.token {
            Some(token) => storage_set(KEY_TOKEN, token),
            None => storage_remove(KEY_TOKEN),
        }
        storage_set(KEY_IS_ADMIN, credential.role.as_flag());
        match &credential.identity {
            Some(identity) => storage_set(KEY_EMAIL, identity),
            None => storage_remove(KEY_EMAIL),
        }
    }

    /// Removes all three entries. Safe to call when nothing is stored.
    pub fn clear() {
        storage_remove(KEY_TOKEN);
        storage_remove(KEY_IS_ADMIN);
        storage_remove(KEY_EMAIL);
    }
}

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok()).flatten()
}

#[cfg(target_arch = "wasm32")]
fn storage_get(key: &str) -> Option<String> {
    storage().and_then(|storage| storage.get_item(key).ok()).flatten()
}

#[cfg(target_arch = "wasm32")]
fn storage_set(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
fn storage_remove(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native_storage {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static ENTRIES: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub(super) fn get(key: &str) -> Option<String> {
        ENTRIES.with(|entries| entries.borrow().get(key).cloned())
    }

    pub(super) fn set(key: &str, value: &str) {
        ENTRIES.with(|entries| {
            entries.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub(super) fn remove(key: &str) {
        ENTRIES.with(|entries| {
            entries.borrow_mut().remove(key);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_get(key: &str) -> Option<String> {
    native_storage::get(key)
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_set(key: &str, value: &str) {
    native_storage::set(key, value);
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_remove(key: &str) {
    native_storage::remove(key);
}

#[cfg(test)]
mod tests {
    use super::{Credential, Role, SessionStore};

    #[test]
    fn read_defaults_when_nothing_is_stored() {
        SessionStore::clear();

        let credential = SessionStore::read();
        assert_eq!(credential.token, None);
        assert_eq!(credential.role, Role::Standard);
        assert_eq!(credential.identity, None);
    }

    #[test]
    fn write_then_read_round_trips_all_fields() {
        SessionStore::clear();
        SessionStore::write(&Credential::authenticated(
            "T1".to_string(),
            Role::Privileged,
            "a@b.com".to_string(),
        ));

        let credential = SessionStore::read();
        assert_eq!(credential.token.as_deref(), Some("T1"));
        assert_eq!(credential.role, Role::Privileged);
        assert_eq!(credential.identity.as_deref(), Some("a@b.com"));

        SessionStore::clear();
    }

    #[test]
    fn write_keeps_token_and_identity_together() {
        SessionStore::clear();
        SessionStore::write(&Credential::authenticated(
            "T1".to_string(),
            Role::Standard,
            "a@b.com".to_string(),
        ));

        let credential = SessionStore::read();
        assert_eq!(credential.token.is_some(), credential.identity.is_some());

        SessionStore::clear();
        let credential = SessionStore::read();
        assert_eq!(credential.token, None);
        assert_eq!(credential.identity, None);
    }

    #[test]
    fn clear_is_idempotent() {
        SessionStore::clear();
        SessionStore::clear();
        assert_eq!(SessionStore::read(), Credential::default());
    }

    #[test]
    fn blank_token_reads_as_absent() {
        SessionStore::clear();
        SessionStore::write(&Credential {
            token: Some("   ".to_string()),
            role: Role::Standard,
            identity: Some("a@b.com".to_string()),
        });

        assert_eq!(SessionStore::read().token, None);

        SessionStore::clear();
    }

    #[test]
    fn unknown_privilege_flag_defaults_to_standard() {
        assert_eq!(Role::from_flag(Some("yes".to_string())), Role::Standard);
        assert_eq!(Role::from_flag(Some("TRUE".to_string())), Role::Standard);
        assert_eq!(Role::from_flag(None), Role::Standard);
        assert_eq!(Role::from_flag(Some("true".to_string())), Role::Privileged);
    }
}
