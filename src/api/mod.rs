//! API client for the music catalog.
//!
//! - [`CatalogClient`]: fetches the piece listing
//! - [`filter_by_mood`]: the offline mood filter the client applies

pub mod catalog;

pub use catalog::{filter_by_mood, CatalogClient};
