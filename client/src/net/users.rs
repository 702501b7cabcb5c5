//! `/users` endpoints.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::api::{ApiClient, ApiError};
use super::types::User;

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_user(api: &ApiClient, user: &User) -> Result<User, ApiError> {
    api.post("/users", user).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails; 404 when no account matches.
pub async fn find_by_email(api: &ApiClient, email: &str) -> Result<User, ApiError> {
    api.get(&format!("/users/{}", urlencoding::encode(email)), Vec::new()).await
}
