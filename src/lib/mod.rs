//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata. Centralizing these keeps network behavior consistent and avoids
//! duplicated logic in routes and features. The API helpers attach the session
//! bearer token at the transport layer; callers never see it.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{Base, get_json, post_json, put_json};
pub(crate) use errors::AppError;
