//! Session state and context for the frontend. The provider hydrates the
//! credential once from durable storage and exposes a derived access level
//! for guards and routes. The login and logout workflows are the only code
//! paths that change the stored credential; both go through this context so
//! views react without a reload.

use crate::features::auth::gate::{classify, AccessLevel};
use crate::features::auth::session::{Credential, SessionStore};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub credential: RwSignal<Credential>,
    pub access_level: Signal<AccessLevel>,
}

impl SessionContext {
    /// Builds a context around the provided credential signal.
    fn new(credential: RwSignal<Credential>) -> Self {
        let access_level = Signal::derive(move || credential.with(|current| classify(current)));
        Self {
            credential,
            access_level,
        }
    }

    /// Persists the credential and updates the in-memory copy after login.
    pub fn sign_in(&self, credential: Credential) {
        SessionStore::write(&credential);
        self.credential.set(credential);
    }

    /// Clears storage and the in-memory copy, typically on logout.
    pub fn sign_out(&self) {
        SessionStore::clear();
        self.credential.set(Credential::default());
    }

    /// Re-reads durable storage, picking up changes made outside this tab.
    pub fn refresh(&self) {
        self.credential.set(SessionStore::read());
    }

    /// Display identity of the signed-in visitor, when one is stored.
    pub fn identity(&self) -> Option<String> {
        self.credential.with(|current| current.identity.clone())
    }
}

/// Provides session context hydrated from durable storage.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let credential = RwSignal::new(SessionStore::read());
    provide_context(SessionContext::new(credential));

    view! { {children()} }
}

/// Returns the current session context or a fallback built from storage.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let credential = RwSignal::new(SessionStore::read());
        SessionContext::new(credential)
    })
}
