//! `/bookings` endpoints.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use super::api::{ApiClient, ApiError};
use super::types::{Booking, BookingPatch, BookingRequest};

fn booking_path(id: &str) -> String {
    format!("/bookings/{}", urlencoding::encode(id))
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_booking(api: &ApiClient, request: &BookingRequest) -> Result<Booking, ApiError> {
    api.post("/bookings", request).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_bookings(api: &ApiClient) -> Result<Vec<Booking>, ApiError> {
    api.get("/bookings", Vec::new()).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn get_booking(api: &ApiClient, id: &str) -> Result<Booking, ApiError> {
    api.get(&booking_path(id), Vec::new()).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn bookings_by_user(api: &ApiClient, user_id: &str) -> Result<Vec<Booking>, ApiError> {
    api.get(&format!("/bookings/user/{}", urlencoding::encode(user_id)), Vec::new()).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn bookings_by_tour(api: &ApiClient, tour_id: &str) -> Result<Vec<Booking>, ApiError> {
    api.get(&format!("/bookings/tour/{}", urlencoding::encode(tour_id)), Vec::new()).await
}

/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_booking(api: &ApiClient, id: &str, patch: &BookingPatch) -> Result<Booking, ApiError> {
    api.patch(&booking_path(id), patch).await
}

/// Cancelling is a `DELETE`; the API keeps the record as `cancelado`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn cancel_booking(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&booking_path(id)).await
}
