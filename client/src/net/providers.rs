//! `/providers` endpoints.

#[cfg(test)]
#[path = "providers_test.rs"]
mod providers_test;

use super::api::{ApiClient, ApiError};
use super::types::Provider;

fn provider_path(id: &str) -> String {
    format!("/providers/{}", urlencoding::encode(id))
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_provider(api: &ApiClient, provider: &Provider) -> Result<Provider, ApiError> {
    api.post("/providers", provider).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_providers(api: &ApiClient) -> Result<Vec<Provider>, ApiError> {
    api.get("/providers", Vec::new()).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn get_provider(api: &ApiClient, id: &str) -> Result<Provider, ApiError> {
    api.get(&provider_path(id), Vec::new()).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_provider(api: &ApiClient, id: &str, provider: &Provider) -> Result<Provider, ApiError> {
    api.patch(&provider_path(id), provider).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete_provider(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&provider_path(id)).await
}
