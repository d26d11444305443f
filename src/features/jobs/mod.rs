//! Postings feature: listing with search and pagination, detail lookup, and
//! admin-only creation from raw description text.

pub(crate) mod client;
pub(crate) mod types;
