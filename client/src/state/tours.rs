//! Tour-list state for the dashboard and tours table.
//!
//! DESIGN
//! ======
//! Deletion is optimistic on the rendered list only after the API confirms:
//! the table calls `remove` once the delete call returns, then re-fetches.

#[cfg(test)]
#[path = "tours_test.rs"]
mod tours_test;

use crate::net::types::Tour;

/// Tours owned by the signed-in provider.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToursState {
    pub items: Vec<Tour>,
    pub loading: bool,
    pub error: Option<String>,
    /// Tour whose delete call is in flight.
    pub deleting: Option<String>,
}

impl ToursState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<Tour>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Drop tour `id` from the rendered list.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
        if self.deleting.as_deref() == Some(id) {
            self.deleting = None;
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_tours(&self.items)
    }
}

/// Quick numbers on the dashboard home.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_tours: usize,
    pub total_reviews: usize,
    /// Mean rating over tours that have one; 0 when none do.
    pub average_rating: f64,
    pub discounted: usize,
}

impl DashboardStats {
    #[allow(clippy::cast_precision_loss)]
    pub fn from_tours(tours: &[Tour]) -> Self {
        let rated: Vec<f64> = tours.iter().map(|t| t.rating).filter(|r| *r > 0.0).collect();
        let average_rating = if rated.is_empty() { 0.0 } else { rated.iter().sum::<f64>() / rated.len() as f64 };
        Self {
            total_tours: tours.len(),
            total_reviews: tours.iter().map(|t| t.reviews.len()).sum(),
            average_rating,
            discounted: tours.iter().filter(|t| t.has_discount()).count(),
        }
    }
}
