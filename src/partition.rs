//! Free/pro partitioning and URL enrichment.
//!
//! A fixed number of pieces is chosen uniformly at random to be offered for
//! free; everything else is pro. Each piece also gets a download URL and a
//! metadata page URL derived from its filename.

use rand::seq::{index, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{CatalogError, Result};
use crate::models::{Access, EnrichedPiece, Piece};

/// Default number of pieces marked free.
pub const DEFAULT_FREE_SLOTS: usize = 4;

/// How free pieces are picked out of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FreeSelection {
    /// Sample distinct positions. Exactly `min(free_slots, n)` pieces are free.
    #[default]
    ByIndex,
    /// Shuffle a copy and mark every piece equal to one of the first
    /// `free_slots`. Identical duplicate pieces all become free, so the
    /// free count can exceed `free_slots`.
    ByEquality,
}

/// Derives download and metadata URLs from a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlScheme {
    base_url: String,
    download_base: String,
}

impl UrlScheme {
    pub fn new<S1: Into<String>, S2: Into<String>>(base_url: S1, download_base: S2) -> Self {
        Self {
            base_url: base_url.into(),
            download_base: download_base.into(),
        }
    }

    /// `<download_base>/<filename>`
    pub fn download_url(&self, filename: &str) -> String {
        format!("{}/{}", self.download_base, filename)
    }

    /// `<base_url>/<filename without trailing .mp3>`
    pub fn metadata_url(&self, filename: &str) -> String {
        let stem = filename.strip_suffix(".mp3").unwrap_or(filename);
        format!("{}/{}", self.base_url, stem)
    }
}

impl From<&ClientConfig> for UrlScheme {
    fn from(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone(), config.download_base.clone())
    }
}

/// Assigns access tiers and derived URLs.
#[derive(Debug, Clone)]
pub struct Partitioner {
    free_slots: usize,
    selection: FreeSelection,
    urls: UrlScheme,
}

impl Partitioner {
    pub fn new(urls: UrlScheme) -> Self {
        Self {
            free_slots: DEFAULT_FREE_SLOTS,
            selection: FreeSelection::default(),
            urls,
        }
    }

    pub fn with_free_slots(mut self, free_slots: usize) -> Self {
        self.free_slots = free_slots;
        self
    }

    pub fn with_selection(mut self, selection: FreeSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn free_slots(&self) -> usize {
        self.free_slots
    }

    pub fn selection(&self) -> FreeSelection {
        self.selection
    }

    /// Mark a random subset free and attach URLs, keeping input order.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` if any piece lacks a string `filename`.
    /// Nothing is partially produced in that case.
    pub fn enrich<R: Rng + ?Sized>(&self, pieces: Vec<Piece>, rng: &mut R) -> Result<Vec<EnrichedPiece>> {
        if let Some(pos) = pieces.iter().position(|p| p.filename().is_none()) {
            return Err(CatalogError::MalformedRecord(format!(
                "piece at position {} has no filename",
                pos
            )));
        }

        let free = self.free_mask(&pieces, rng);
        debug!(
            "Marked {} of {} pieces free",
            free.iter().filter(|f| **f).count(),
            pieces.len()
        );

        Ok(pieces
            .into_iter()
            .zip(free)
            .map(|(piece, is_free)| self.enrich_one(piece, is_free))
            .collect())
    }

    /// One flag per input piece, `true` for free.
    fn free_mask<R: Rng + ?Sized>(&self, pieces: &[Piece], rng: &mut R) -> Vec<bool> {
        let amount = self.free_slots.min(pieces.len());
        let mut mask = vec![false; pieces.len()];

        match self.selection {
            FreeSelection::ByIndex => {
                for i in index::sample(rng, pieces.len(), amount) {
                    mask[i] = true;
                }
            }
            FreeSelection::ByEquality => {
                let mut shuffled: Vec<&Piece> = pieces.iter().collect();
                shuffled.shuffle(rng);
                let chosen = &shuffled[..amount];
                for (flag, piece) in mask.iter_mut().zip(pieces) {
                    *flag = chosen.contains(&piece);
                }
            }
        }

        mask
    }

    fn enrich_one(&self, piece: Piece, is_free: bool) -> EnrichedPiece {
        // Filenames were checked in enrich().
        let filename = piece.filename().unwrap_or_default().to_string();
        let access = if is_free { Access::Free } else { Access::Pro };

        EnrichedPiece::new(
            piece,
            access,
            self.urls.download_url(&filename),
            self.urls.metadata_url(&filename),
        )
    }
}
