//! The persisted catalog document.

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::piece::EnrichedPiece;

/// Timestamp layout for `generated_at`: local time, microseconds, no offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Enriched pieces plus summary counters, as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogSnapshot {
    /// Generation time (ISO-8601).
    pub generated_at: String,
    /// Number of entries in `pieces`.
    pub total_pieces: usize,
    /// Number of entries marked free.
    pub free_count: usize,
    /// Enriched pieces in catalog order.
    pub pieces: Vec<EnrichedPiece>,
}

impl CatalogSnapshot {
    /// Build a snapshot stamped with the current local time.
    pub fn new(pieces: Vec<EnrichedPiece>) -> Self {
        let generated_at = Local::now()
            .naive_local()
            .format(TIMESTAMP_FORMAT)
            .to_string();
        Self::with_timestamp(generated_at, pieces)
    }

    /// Build a snapshot with an explicit timestamp.
    pub fn with_timestamp<S: Into<String>>(generated_at: S, pieces: Vec<EnrichedPiece>) -> Self {
        let free_count = pieces.iter().filter(|p| p.is_free()).count();
        Self {
            generated_at: generated_at.into(),
            total_pieces: pieces.len(),
            free_count,
            pieces,
        }
    }

    /// Number of entries marked pro.
    pub fn pro_count(&self) -> usize {
        self.total_pieces - self.free_count
    }
}
