//! Wire DTOs for the remote tour API.
//!
//! DESIGN
//! ======
//! Field names follow the API's JSON (`camelCase` for resources, `snake_case`
//! for auth token payloads). Enum tags keep the API's Spanish values while the
//! Rust variants use English names. Most fields carry `#[serde(default)]` so
//! partially populated records from older API versions still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// TOURS
// =============================================================================

/// A bookable tour listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// Tour identifier. Older API builds send `_id`.
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Free-text duration such as `"2 horas"`.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub meeting_point: String,
    /// Languages the tour is offered in.
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub location: Location,
    /// Itinerary, in visiting order.
    #[serde(default)]
    pub stops: Vec<Stop>,
    #[serde(default)]
    pub images: Vec<TourImage>,
    /// Date/hour combinations that cannot be booked.
    #[serde(default, alias = "availableDates")]
    pub non_available_dates: Vec<BlackoutDate>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Owning provider, either as a bare id or embedded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderRef>,
}

impl Tour {
    /// First image URL, used as the list thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(|image| image.image_url.as_str())
    }

    /// Whether the tour currently carries a discount.
    pub fn has_discount(&self) -> bool {
        self.price.discount.is_some()
    }
}

/// Pricing block of a tour.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default)]
    pub value: f64,
    /// Pay-what-you-want tours; `value` is informative only.
    #[serde(default)]
    pub based_on_tips: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

/// Time-boxed discount on a tour price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    /// ISO date (`YYYY-MM-DD`), empty when unbounded.
    #[serde(default)]
    pub valid_from: String,
    #[serde(default)]
    pub valid_to: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountKind {
    #[serde(rename = "porcentaje")]
    Percentage,
    #[serde(rename = "valor")]
    Fixed,
}

impl DiscountKind {
    /// Wire tag, also used as the `<select>` option value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "porcentaje",
            Self::Fixed => "valor",
        }
    }

    /// Parse a wire tag back into a kind.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "porcentaje" => Some(Self::Percentage),
            "valor" => Some(Self::Fixed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

/// A named waypoint within a tour itinerary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    #[serde(default)]
    pub stop_name: String,
    #[serde(default)]
    pub location: StopLocation,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StopLocation {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    /// Street address of the stop.
    #[serde(rename = "direction", default)]
    pub address: String,
}

/// An image already hosted by the image API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub image_url: String,
}

/// A date, and the hours on it, excluded from booking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlackoutDate {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub hours: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
}

/// Create/update payload produced by the tour form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub duration: String,
    pub price: Price,
    pub meeting_point: String,
    pub language: Vec<String>,
    pub location: Location,
    pub stops: Vec<Stop>,
    pub non_available_dates: Vec<BlackoutDate>,
    pub images: Vec<TourImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
}

impl TourDraft {
    /// Append freshly uploaded image URLs after the already-hosted ones.
    pub fn push_uploaded(&mut self, urls: impl IntoIterator<Item = String>) {
        self.images
            .extend(urls.into_iter().map(|image_url| TourImage { id: None, image_url }));
    }
}

/// Query filters for `GET /tours`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    pub limit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_discounted: Option<bool>,
}

impl Default for TourFilters {
    fn default() -> Self {
        Self { title: None, category: None, provider_id: None, limit: "5".to_owned(), only_discounted: None }
    }
}

impl TourFilters {
    /// Filters listing every tour owned by `provider_id`.
    pub fn for_provider(provider_id: &str, limit: usize) -> Self {
        Self { provider_id: Some(provider_id.to_owned()), limit: limit.to_string(), ..Self::default() }
    }

    /// Flatten into query pairs, skipping unset filters.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(title) = &self.title {
            query.push(("title".to_owned(), title.clone()));
        }
        if let Some(category) = &self.category {
            query.push(("category".to_owned(), category.clone()));
        }
        if let Some(provider_id) = &self.provider_id {
            query.push(("providerId".to_owned(), provider_id.clone()));
        }
        query.push(("limit".to_owned(), self.limit.clone()));
        if let Some(only) = self.only_discounted {
            query.push(("onlyDiscounted".to_owned(), only.to_string()));
        }
        query
    }
}

// =============================================================================
// PROVIDERS & USERS
// =============================================================================

/// Business entity that owns tours.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    #[serde(alias = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Ids of the tours this provider owns.
    #[serde(default)]
    pub tours: Vec<String>,
    #[serde(rename = "direction", default)]
    pub address: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub verification_status: VerificationStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStatus {
    #[serde(rename = "verificado")]
    Verified,
    #[serde(rename = "pendiente")]
    Pending,
    #[default]
    #[serde(rename = "no verificado")]
    Unverified,
}

impl VerificationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Pending => "Pending verification",
            Self::Unverified => "Not verified",
        }
    }
}

/// Tour owner as sent by the API: a bare id or the embedded record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderRef {
    Id(String),
    Embedded(Provider),
}

impl ProviderRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Embedded(provider) => &provider.id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    /// Only ever sent to the API; stripped before the user is cached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "cliente")]
    Client,
    #[default]
    #[serde(rename = "proveedor")]
    Provider,
}

// =============================================================================
// BOOKINGS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub tour_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub hour: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub number_of_people: u32,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Body of `POST /bookings`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub tour_id: String,
    pub user_id: String,
    pub date: String,
    pub hour: String,
    pub number_of_people: u32,
}

/// Partial booking update; unset fields are left alone by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_people: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmado")]
    Confirmed,
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub provider: Option<Provider>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}
