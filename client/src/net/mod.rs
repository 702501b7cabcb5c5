//! Networking modules for the remote tour API and the image host.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the bearer/refresh flow over a pluggable `transport`; the
//! resource modules (`auth`, `tours`, `bookings`, `providers`, `users`) are
//! thin call sets on top of it. `source` picks between the remote tours and
//! the `local_tours` cache, and `upload` sends images to the image host.

pub mod api;
pub mod auth;
pub mod bookings;
pub mod local_tours;
pub mod providers;
pub mod source;
pub mod tours;
pub mod transport;
pub mod types;
pub mod upload;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;
