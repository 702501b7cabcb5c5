//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `tours`, `tour_form`, ...) so
//! individual components can depend on small focused models. None of these
//! types touch the DOM; pages wrap them in signals.

pub mod bookings;
pub mod image_review;
pub mod session;
pub mod tour_form;
pub mod tours;
pub mod ui;
