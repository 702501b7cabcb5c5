//! Where the dashboard reads and writes tours.
//!
//! DESIGN
//! ======
//! `TourSource` dispatches to the remote API or to the local-storage cache
//! depending on `ClientConfig::mock_mode`. Pages only ever talk to this type.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::sync::Arc;

use super::api::{ApiClient, ApiError};
use super::local_tours::LocalTours;
use super::tours;
use super::types::{Tour, TourDraft, TourFilters};
use crate::util::config::ClientConfig;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Debug)]
pub enum TourSource {
    Remote(ApiClient),
    Local(LocalTours),
}

impl TourSource {
    /// Remote unless mock mode is enabled.
    pub fn from_config(config: &ClientConfig, api: ApiClient, store: Arc<dyn KeyValueStore>) -> Self {
        if config.mock_mode {
            leptos::logging::log!("mock mode: tours are served from local storage");
            Self::Local(LocalTours::new(store))
        } else {
            Self::Remote(api)
        }
    }

    /// Tours matching `filters`. The local source ignores filters.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the remote call fails.
    pub async fn list(&self, filters: &TourFilters) -> Result<Vec<Tour>, ApiError> {
        match self {
            Self::Remote(api) => tours::list_tours(api, filters).await,
            Self::Local(local) => Ok(local.list()),
        }
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`], 404 when the tour does not exist.
    pub async fn get(&self, id: &str) -> Result<Tour, ApiError> {
        match self {
            Self::Remote(api) => tours::get_tour(api, id).await,
            Self::Local(local) => local.get(id),
        }
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the remote call fails.
    pub async fn create(&self, draft: &TourDraft) -> Result<Tour, ApiError> {
        match self {
            Self::Remote(api) => tours::create_tour(api, draft).await,
            Self::Local(local) => Ok(local.create(draft)),
        }
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`], 404 when the tour does not exist.
    pub async fn update(&self, id: &str, provider_id: Option<&str>, draft: &TourDraft) -> Result<Tour, ApiError> {
        match self {
            Self::Remote(api) => tours::update_tour(api, id, provider_id, draft).await,
            Self::Local(local) => local.update(id, draft),
        }
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the remote call fails.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        match self {
            Self::Remote(api) => tours::delete_tour(api, id).await,
            Self::Local(local) => {
                local.delete(id);
                Ok(())
            }
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}
