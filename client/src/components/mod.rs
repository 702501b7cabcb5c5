//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and the tour/booking surfaces while
//! reading and writing shared state from Leptos context providers.

pub mod booking_table;
pub mod image_review_dialog;
pub mod layout;
pub mod notice_stack;
pub mod tour_form;
pub mod tour_table;
