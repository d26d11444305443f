//! Request and response types for the sign-in endpoint. The password only
//! lives in the outbound payload; nothing here is persisted.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    pub token: String,
    pub user: AuthUser,
}
