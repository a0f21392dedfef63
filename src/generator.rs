//! Unified catalog generation interface.
//!
//! Runs the whole fetch, filter, partition and write pipeline.

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::info;

use crate::api::CatalogClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{CatalogSnapshot, Piece};
use crate::partition::{FreeSelection, Partitioner, UrlScheme, DEFAULT_FREE_SLOTS};
use crate::persist::{self, DEFAULT_OUTPUT_PATH};

/// Moods a catalog is built from unless told otherwise.
pub const DEFAULT_MOODS: [&str; 3] = ["bright", "relaxed", "uplifting"];

/// Maximum number of matching pieces kept.
pub const DEFAULT_LIMIT: usize = 20;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Where the catalog was written.
    pub output_path: PathBuf,
    pub total_pieces: usize,
    pub free_count: usize,
    pub pro_count: usize,
}

/// Main catalog generator.
///
/// # Example
///
/// ```rust,no_run
/// use moodcat::CatalogGenerator;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut generator = CatalogGenerator::new()?;
///     generator.set_output_path("mood_music_catalog.json");
///
///     let report = generator.run().await?;
///     println!("{} pieces, {} free", report.total_pieces, report.free_count);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct CatalogGenerator {
    client: CatalogClient,
    moods: Vec<String>,
    limit: usize,
    free_slots: usize,
    selection: FreeSelection,
    output_path: PathBuf,
}

impl CatalogGenerator {
    /// Create a generator against the public Incompetech catalog.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a generator with custom client settings.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: CatalogClient::new(config)?,
            moods: DEFAULT_MOODS.iter().map(|m| m.to_string()).collect(),
            limit: DEFAULT_LIMIT,
            free_slots: DEFAULT_FREE_SLOTS,
            selection: FreeSelection::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        })
    }

    /// Set the mood keywords pieces are matched against.
    pub fn set_moods<I, S>(&mut self, moods: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moods = moods.into_iter().map(Into::into).collect();
    }

    pub fn moods(&self) -> &[String] {
        &self.moods
    }

    /// Set how many matching pieces are kept.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Set how many pieces are marked free.
    pub fn set_free_slots(&mut self, free_slots: usize) {
        self.free_slots = free_slots;
    }

    pub fn free_slots(&self) -> usize {
        self.free_slots
    }

    pub fn set_selection(&mut self, selection: FreeSelection) {
        self.selection = selection;
    }

    pub fn selection(&self) -> FreeSelection {
        self.selection
    }

    /// Set where the catalog is written.
    ///
    /// Default is `../../extras/mood_music_catalog.json`.
    pub fn set_output_path<P: AsRef<Path>>(&mut self, path: P) {
        self.output_path = path.as_ref().to_path_buf();
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Run the pipeline with the thread-local RNG.
    pub async fn run(&self) -> Result<GenerationReport> {
        let pieces = self.fetch_candidates().await?;
        self.finish(pieces, &mut rand::rng())
    }

    /// Run the pipeline with a caller-supplied RNG.
    pub async fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GenerationReport> {
        let pieces = self.fetch_candidates().await?;
        self.finish(pieces, rng)
    }

    async fn fetch_candidates(&self) -> Result<Vec<Piece>> {
        let mut pieces = self.client.find_by_mood(self.moods.as_slice()).await?;
        pieces.truncate(self.limit);
        info!("Selected {} pieces for moods {:?}", pieces.len(), self.moods);
        Ok(pieces)
    }

    fn finish<R: Rng + ?Sized>(
        &self,
        pieces: Vec<Piece>,
        rng: &mut R,
    ) -> Result<GenerationReport> {
        let partitioner = Partitioner::new(UrlScheme::from(self.client.config()))
            .with_free_slots(self.free_slots)
            .with_selection(self.selection);
        let enriched = partitioner.enrich(pieces, rng)?;

        let snapshot = CatalogSnapshot::new(enriched);
        persist::write_snapshot(&self.output_path, &snapshot)?;

        Ok(GenerationReport {
            output_path: self.output_path.clone(),
            total_pieces: snapshot.total_pieces,
            free_count: snapshot.free_count,
            pro_count: snapshot.pro_count(),
        })
    }
}
