//! Auth feature module covering the credential store, the session gate, and
//! the sign-in flow. It keeps authorization decisions out of the UI and must
//! avoid logging token material.
//!
//! Flow overview: login exchanges email/password for a token plus privilege
//! flag and identity, persists all three together, and navigates to the job
//! listing. Guards classify the stored credential on every evaluation and
//! redirect when the classification denies access. Logout clears the store
//! and returns to the login form.

pub(crate) mod client;
pub(crate) mod gate;
mod guards;
pub(crate) mod session;
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod validate;

pub(crate) use guards::{RequireAdmin, RequireAuth};
