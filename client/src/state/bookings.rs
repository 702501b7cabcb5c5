//! Bookings table state.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use crate::net::types::{Booking, BookingStatus};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingsState {
    pub items: Vec<Booking>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BookingsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<Booking>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Reflect a confirmed cancellation without re-fetching.
    pub fn mark_cancelled(&mut self, id: &str) {
        if let Some(booking) = self.items.iter_mut().find(|b| b.id == id) {
            booking.status = BookingStatus::Cancelled;
        }
    }

    /// Bookings that can still be cancelled.
    pub fn active(&self) -> impl Iterator<Item = &Booking> {
        self.items.iter().filter(|b| b.status != BookingStatus::Cancelled)
    }
}
