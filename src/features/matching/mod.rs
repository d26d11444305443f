//! Matching feature: criteria validation, the matching request, and the
//! loading/loaded/failed phases the view renders. Re-submissions are
//! sequence-tagged so the newest request always decides the final state.

pub(crate) mod client;
pub(crate) mod types;
pub(crate) mod workflow;
