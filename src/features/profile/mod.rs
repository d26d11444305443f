//! Profile feature: the visitor's account details, resume text, and the
//! variable-shape analysis the parsing engine derives from it.

pub(crate) mod analysis;
pub(crate) mod client;
pub(crate) mod types;
