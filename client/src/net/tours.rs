//! `/tours` endpoints.

#[cfg(test)]
#[path = "tours_test.rs"]
mod tours_test;

use super::api::{ApiClient, ApiError};
use super::types::{Tour, TourDraft, TourFilters};

/// Default page size for the ranked listings.
pub const DEFAULT_LIMIT: usize = 5;

fn tour_path(id: &str) -> String {
    format!("/tours/{}", urlencoding::encode(id))
}

fn limit_query(limit: Option<usize>) -> Vec<(String, String)> {
    vec![("limit".to_owned(), limit.unwrap_or(DEFAULT_LIMIT).to_string())]
}

/// `GET /tours` with the given filters.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_tours(api: &ApiClient, filters: &TourFilters) -> Result<Vec<Tour>, ApiError> {
    api.get("/tours", filters.to_query()).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn get_tour(api: &ApiClient, id: &str) -> Result<Tour, ApiError> {
    api.get(&tour_path(id), Vec::new()).await
}

/// Best rated tours of one category.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn popular_by_category(api: &ApiClient, category: &str, limit: Option<usize>) -> Result<Vec<Tour>, ApiError> {
    api.get(&format!("/tours/popular/{}", urlencoding::encode(category)), limit_query(limit)).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn most_recent(api: &ApiClient, limit: Option<usize>) -> Result<Vec<Tour>, ApiError> {
    api.get("/tours/recent", limit_query(limit)).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_tour(api: &ApiClient, draft: &TourDraft) -> Result<Tour, ApiError> {
    api.post("/tours", draft).await
}

/// `PATCH /tours/:id`, carrying the owning provider alongside the fields.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_tour(api: &ApiClient, id: &str, provider_id: Option<&str>, draft: &TourDraft) -> Result<Tour, ApiError> {
    let mut body = draft.clone();
    if let Some(provider_id) = provider_id {
        body.provider_id = Some(provider_id.to_owned());
    }
    api.patch(&tour_path(id), &body).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete_tour(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&tour_path(id)).await
}
