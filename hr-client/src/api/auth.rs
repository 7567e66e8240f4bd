//! Auth API

use shared::client::{LoginRequest, LoginResponse};

use crate::error::ApiResult;
use crate::gateway::Gateway;

/// Sign-in and session teardown
#[derive(Debug, Clone)]
pub struct AuthApi {
    gateway: Gateway,
}

impl AuthApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Sign in; on success the returned token is stored in the session
    /// so every subsequent call carries it
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        // A fresh sign-in must not ride on the previous credential.
        self.gateway.session().clear();

        let response: LoginResponse = self.gateway.post("/auth/login", &request).await?;
        self.gateway.session().set(response.access_token.clone());
        tracing::debug!(email = %response.employee.email, "signed in");

        Ok(response)
    }

    /// Drop the stored credential. The server keeps no session state,
    /// so this is purely local.
    pub fn logout(&self) {
        self.gateway.session().clear();
        tracing::debug!("signed out");
    }
}
