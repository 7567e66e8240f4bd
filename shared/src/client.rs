//! Auth payloads
//!
//! Shared between hr-client and hr-api-mock so both sides agree on the
//! login wire format.

use serde::{Deserialize, Serialize};

use crate::models::GroupType;

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Token scheme, always `Bearer`
    #[serde(rename = "type")]
    pub token_type: String,
    /// The account that signed in
    pub employee: LoginEmployee,
}

/// Identity snapshot embedded in the login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginEmployee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub group: GroupType,
}
