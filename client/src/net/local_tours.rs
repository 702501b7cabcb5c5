//! Tours kept in local storage instead of the remote API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used when `TOURDESK_MOCK_MODE` is on, for demos without a backend. The
//! whole collection lives as one JSON array under the `tours` key and is
//! re-serialized after every mutation. An empty store reads as the seed
//! collection.

#[cfg(test)]
#[path = "local_tours_test.rs"]
mod local_tours_test;

use std::sync::Arc;

use super::api::ApiError;
use super::types::{
    BlackoutDate, Location, Price, Provider, ProviderRef, Review, Stop, StopLocation, Tour, TourDraft, TourImage,
    VerificationStatus,
};
use crate::util::storage::{self, KeyValueStore};

pub const TOURS_KEY: &str = "tours";

/// CRUD over the locally cached tour collection.
#[derive(Clone)]
pub struct LocalTours {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for LocalTours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalTours").finish_non_exhaustive()
    }
}

impl LocalTours {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Tour> {
        storage::load_json(self.store.as_ref(), TOURS_KEY).unwrap_or_else(seed_tours)
    }

    /// # Errors
    ///
    /// Returns a 404 [`ApiError`] when no tour has `id`.
    pub fn get(&self, id: &str) -> Result<Tour, ApiError> {
        self.list()
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::not_found("Tour not found"))
    }

    /// Store a new tour with a fresh id, no rating and no reviews.
    pub fn create(&self, draft: &TourDraft) -> Tour {
        let mut tour = Tour {
            id: uuid::Uuid::new_v4().to_string(),
            rating: 0.0,
            reviews: Vec::new(),
            provider: draft.provider_id.clone().map(ProviderRef::Id),
            ..Tour::default()
        };
        apply_draft(&mut tour, draft);

        let mut tours = self.list();
        tours.push(tour.clone());
        self.save(&tours);
        tour
    }

    /// Replace the editable fields of tour `id`.
    ///
    /// # Errors
    ///
    /// Returns a 404 [`ApiError`] when no tour has `id`.
    pub fn update(&self, id: &str, draft: &TourDraft) -> Result<Tour, ApiError> {
        let mut tours = self.list();
        let tour = tours
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::not_found("Tour not found"))?;
        apply_draft(tour, draft);
        let updated = tour.clone();
        self.save(&tours);
        Ok(updated)
    }

    /// Remove tour `id`. Unknown ids are a no-op.
    pub fn delete(&self, id: &str) {
        let mut tours = self.list();
        tours.retain(|t| t.id != id);
        self.save(&tours);
    }

    fn save(&self, tours: &[Tour]) {
        storage::save_json(self.store.as_ref(), TOURS_KEY, &tours);
    }
}

/// Copy the form-editable fields; id, provider, rating and reviews stay.
fn apply_draft(tour: &mut Tour, draft: &TourDraft) {
    tour.title.clone_from(&draft.title);
    tour.category.clone_from(&draft.category);
    tour.description.clone_from(&draft.description);
    tour.duration.clone_from(&draft.duration);
    tour.price = draft.price.clone();
    tour.meeting_point.clone_from(&draft.meeting_point);
    tour.language.clone_from(&draft.language);
    tour.location = draft.location.clone();
    tour.stops.clone_from(&draft.stops);
    tour.non_available_dates.clone_from(&draft.non_available_dates);
    tour.images.clone_from(&draft.images);
}

// =============================================================================
// SEED DATA
// =============================================================================

fn seed_provider() -> ProviderRef {
    ProviderRef::Embedded(Provider {
        id: "1".to_owned(),
        name: "Juan Proveedor".to_owned(),
        tours: vec!["1".to_owned(), "2".to_owned()],
        address: "Calle Principal 123".to_owned(),
        contact: "+1234567890".to_owned(),
        verification_status: VerificationStatus::Verified,
    })
}

/// Sample collection shown before anything has been stored.
pub fn seed_tours() -> Vec<Tour> {
    vec![
        Tour {
            id: "1".to_owned(),
            title: "Senderismo en los Alpes".to_owned(),
            category: "aventura".to_owned(),
            description: "Una aventura inolvidable por los Alpes suizos.".to_owned(),
            duration: "8 horas".to_owned(),
            price: Price { value: 99.99, based_on_tips: false, discount: None },
            meeting_point: "Estación Central".to_owned(),
            language: vec!["Español".to_owned(), "Inglés".to_owned()],
            location: Location { name: "Alpes Suizos".to_owned(), country: "Suiza".to_owned() },
            stops: vec![Stop {
                stop_name: "Punto de inicio".to_owned(),
                location: StopLocation { lat: 46.5197, lng: 6.6323, address: "Norte".to_owned() },
            }],
            images: vec![TourImage { id: Some("1".to_owned()), image_url: "/placeholder.svg".to_owned() }],
            non_available_dates: vec![BlackoutDate {
                date: "2024-03-01".to_owned(),
                hours: vec!["09:00".to_owned(), "14:00".to_owned()],
            }],
            rating: 4.5,
            reviews: vec![Review {
                id: "1".to_owned(),
                title: "Excelente tour".to_owned(),
                user_id: "2".to_owned(),
                date: "2024-02-23".to_owned(),
                rating: 5.0,
                comment: "¡Una experiencia increíble!".to_owned(),
            }],
            provider: Some(seed_provider()),
        },
        Tour {
            id: "2".to_owned(),
            title: "Tour por el Casco Antiguo".to_owned(),
            category: "historia".to_owned(),
            description: "Descubre la historia de la ciudad antigua.".to_owned(),
            duration: "3 horas".to_owned(),
            price: Price { value: 29.99, based_on_tips: false, discount: None },
            meeting_point: "Plaza Catalunya".to_owned(),
            language: vec!["Español".to_owned()],
            location: Location { name: "Barcelona".to_owned(), country: "España".to_owned() },
            stops: vec![Stop {
                stop_name: "Plaza Mayor".to_owned(),
                location: StopLocation { lat: 41.3851, lng: 2.1734, address: "Este".to_owned() },
            }],
            images: vec![TourImage { id: Some("2".to_owned()), image_url: "/placeholder.svg".to_owned() }],
            non_available_dates: vec![BlackoutDate {
                date: "2024-03-02".to_owned(),
                hours: vec!["10:00".to_owned(), "16:00".to_owned()],
            }],
            rating: 4.8,
            reviews: Vec::new(),
            provider: Some(seed_provider()),
        },
    ]
}
