//! Login, registration and logout against `/auth`.
//!
//! A successful login begins the session: tokens, user and provider are
//! persisted through the client's `SessionStore` before the call returns.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{ApiClient, ApiError};
use super::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::state::session::SessionStore;

/// `POST /auth/login`, then persist the returned session.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the response carries no
/// access token.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    let response: LoginResponse = api.post("/auth/login", &request).await?;
    if response.access_token.is_empty() {
        return Err(ApiError::Decode("login response carried no access token".to_owned()));
    }
    api.session().begin(&response);
    leptos::logging::log!("signed in as {email}");
    Ok(response)
}

/// `POST /auth/register`. Does not sign the new account in.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    api.post("/auth/register", request).await
}

/// Forget the local session. The API keeps no server-side logout.
pub fn logout(session: &SessionStore) {
    session.end();
}
