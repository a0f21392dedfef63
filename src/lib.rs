//! # moodcat
//!
//! Build a small mood-based music catalog from the Incompetech royalty-free
//! library.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`CatalogGenerator`] struct:
//!
//! ```rust,no_run
//! use moodcat::CatalogGenerator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut generator = CatalogGenerator::new()?;
//!     generator.set_moods(["bright", "relaxed", "uplifting"]);
//!     generator.set_output_path("mood_music_catalog.json");
//!
//!     let report = generator.run().await?;
//!     println!("{} free / {} pro", report.free_count, report.pro_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. Fetch `pieces.json` from the catalog
//! 2. Keep pieces whose `feel` mentions one of the moods
//! 3. Truncate to the first 20 matches
//! 4. Mark 4 random pieces free, the rest pro, and attach download/metadata URLs
//! 5. Write the snapshot as indented JSON
//!
//! ## Low-Level APIs
//!
//! - [`CatalogClient`] - fetch and mood-filter the catalog
//! - [`Partitioner`] - free/pro assignment and URL enrichment
//! - [`persist`] - snapshot writing

pub mod api;
pub mod config;
pub mod error;
mod generator;
pub mod models;
pub mod partition;
pub mod persist;

#[cfg(test)]
mod test_support;

// Main interface (recommended)
pub use generator::{CatalogGenerator, GenerationReport, DEFAULT_LIMIT, DEFAULT_MOODS};

// Low-level APIs
pub use api::{filter_by_mood, CatalogClient};
pub use config::ClientConfig;
pub use error::CatalogError;
pub use models::{Access, CatalogSnapshot, EnrichedPiece, Piece};
pub use partition::{FreeSelection, Partitioner, UrlScheme};
