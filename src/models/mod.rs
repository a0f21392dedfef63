//! Data models for catalog pieces and the generated snapshot.
//!
//! A [`Piece`] is kept as the raw JSON object the API returned, so fields the
//! generator does not know about pass through to the output untouched.

pub mod piece;
pub mod snapshot;

// Re-exports for convenience
pub use piece::{Access, EnrichedPiece, Piece};
pub use snapshot::CatalogSnapshot;
