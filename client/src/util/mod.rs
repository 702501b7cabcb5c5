//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, files,
//! object URLs, navigation, build-time config) from page and component logic
//! to improve reuse and testability.

pub mod auth;
pub mod config;
pub mod files;
pub mod format;
pub mod nav;
pub mod preview;
pub mod storage;
