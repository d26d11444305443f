//! Client wrapper for the sign-in endpoint. Centralizes the exchange so route
//! code never builds raw requests or inspects transport details.

use crate::app_lib::{post_json, AppError, Base};
use crate::features::auth::session::{Credential, Role};
use crate::features::auth::types::{LoginRequest, LoginResponse};

/// Exchanges an email/password pair for a session token. A 2xx body that
/// still reports a non-ok status is treated as a rejection.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    let response: LoginResponse = post_json(Base::Api, "/api/auth/login", request).await?;
    if response.status != "ok" {
        return Err(AppError::Service("Invalid email or password.".to_string()));
    }
    Ok(response)
}

impl LoginResponse {
    /// Credential to persist for this session.
    pub fn credential(&self) -> Credential {
        let role = if self.user.is_admin {
            Role::Privileged
        } else {
            Role::Standard
        };
        Credential::authenticated(self.token.clone(), role, self.user.email.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::LoginResponse;
    use crate::features::auth::session::Role;
    use crate::features::auth::types::AuthUser;

    fn response(is_admin: bool) -> LoginResponse {
        LoginResponse {
            status: "ok".to_string(),
            token: "T1".to_string(),
            user: AuthUser {
                id: 1,
                email: "a@b.com".to_string(),
                name: Some("A".to_string()),
                is_admin,
            },
        }
    }

    #[test]
    fn standard_user_yields_standard_credential() {
        let credential = response(false).credential();
        assert_eq!(credential.token.as_deref(), Some("T1"));
        assert_eq!(credential.role, Role::Standard);
        assert_eq!(credential.identity.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn admin_flag_yields_privileged_credential() {
        assert_eq!(response(true).credential().role, Role::Privileged);
    }
}
