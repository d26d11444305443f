//! Route guards. Each guard re-reads durable storage and classifies the
//! credential on every evaluation, so a logout in one view denies access the
//! moment another protected view is entered, without a reload. The wrapped
//! view is only rendered once the classification permits it.

use crate::features::auth::gate::AccessLevel;
use crate::features::auth::state::use_session;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Where the standard guard sends a denied visitor; `None` means render.
fn auth_redirect(level: AccessLevel) -> Option<&'static str> {
    (!level.is_authenticated()).then_some("/login")
}

/// Where the privileged guard sends a denied visitor. Everyone non-privileged
/// lands on the job listing, whose own guard bounces anonymous visitors on to
/// login; a signed-in standard visitor stays signed in.
fn admin_redirect(level: AccessLevel) -> Option<&'static str> {
    (!level.is_privileged()).then_some("/jobs")
}

/// Permits any authenticated visitor; anonymous visitors land on the login
/// form.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let session = use_session();
    session.refresh();
    let navigate = use_navigate();

    let level = session.access_level;

    Effect::new(move |_| {
        if let Some(target) = auth_redirect(level.get()) {
            // UX-only guard; real access control must live on the API.
            navigate(target, Default::default());
        }
    });

    if auth_redirect(level.get_untracked()).is_none() {
        children().into_any()
    } else {
        ().into_any()
    }
}

/// Permits only privileged visitors; everyone else goes to the job listing.
#[component]
pub fn RequireAdmin(children: Children) -> impl IntoView {
    let session = use_session();
    session.refresh();
    let navigate = use_navigate();

    let level = session.access_level;

    Effect::new(move |_| {
        if let Some(target) = admin_redirect(level.get()) {
            navigate(target, Default::default());
        }
    });

    if admin_redirect(level.get_untracked()).is_none() {
        children().into_any()
    } else {
        ().into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::{admin_redirect, auth_redirect};
    use crate::features::auth::gate::AccessLevel;

    #[test]
    fn standard_guard_renders_any_authenticated_visitor() {
        assert_eq!(auth_redirect(AccessLevel::Standard), None);
        assert_eq!(auth_redirect(AccessLevel::Privileged), None);
    }

    #[test]
    fn standard_guard_sends_anonymous_to_login() {
        assert_eq!(auth_redirect(AccessLevel::Anonymous), Some("/login"));
    }

    #[test]
    fn privileged_guard_renders_only_privileged_visitors() {
        assert_eq!(admin_redirect(AccessLevel::Privileged), None);
    }

    #[test]
    fn privileged_guard_sends_everyone_else_to_the_listing() {
        assert_eq!(admin_redirect(AccessLevel::Standard), Some("/jobs"));
        assert_eq!(admin_redirect(AccessLevel::Anonymous), Some("/jobs"));
    }
}
