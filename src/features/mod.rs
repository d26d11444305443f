//! Domain-level frontend features (auth, jobs, matching, profile) and their
//! shared logic. Routes import these modules to keep view code focused while
//! keeping authorization and API handling in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod jobs;
pub(crate) mod matching;
pub(crate) mod profile;
