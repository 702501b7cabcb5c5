//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod bookings;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod root;
pub mod tour_editor;
pub mod tours;
