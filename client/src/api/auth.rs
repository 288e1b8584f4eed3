//! Authentication endpoint

use serde::{Deserialize, Serialize};

use shared::models::AuthUser;

use super::ApiClient;
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Exchange credentials for a token and profile
///
/// A rejection on this call means bad credentials, not an expired session.
pub async fn login(api: &ApiClient, username: &str, password: &str) -> ClientResult<LoginResponse> {
    api.post_json("/auth/login", &LoginRequest { username, password })
        .await
        .map_err(|err| match err {
            ClientError::SessionRejected => ClientError::InvalidCredentials,
            other => other,
        })
}
