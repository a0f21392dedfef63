//! Writing the catalog snapshot to disk.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CatalogError, Result};
use crate::models::CatalogSnapshot;

/// Default location of the generated catalog, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "../../extras/mood_music_catalog.json";

/// Write the snapshot as indented UTF-8 JSON, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_snapshot<P: AsRef<Path>>(path: P, snapshot: &CatalogSnapshot) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| CatalogError::Serialize(e.to_string()))?;

    fs::write(path, json)?;
    info!(
        "Wrote {} pieces ({} free) to {}",
        snapshot.total_pieces,
        snapshot.free_count,
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Access, EnrichedPiece, Piece};
    use serde_json::{json, Value};

    fn snapshot() -> CatalogSnapshot {
        let pieces = [("Café Rêverie.mp3", Access::Free), ("b.mp3", Access::Pro)]
            .into_iter()
            .map(|(name, access)| {
                EnrichedPiece::new(
                    Piece::from_value(json!({ "filename": name, "feel": "Bright" })).unwrap(),
                    access,
                    format!("https://dl/{}", name),
                    format!("https://meta/{}", name),
                )
            })
            .collect();
        CatalogSnapshot::with_timestamp("2024-05-01T10:20:30.000000", pieces)
    }

    #[test]
    fn test_write_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        write_snapshot(&path, &snapshot()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"free_count\": 1"));
        assert!(text.contains("Café Rêverie.mp3"));

        let value: Value = serde_json::from_str(&text).unwrap();
        let pieces = value["pieces"].as_array().unwrap();
        assert_eq!(value["total_pieces"].as_u64().unwrap() as usize, pieces.len());
        assert_eq!(
            value["free_count"].as_u64().unwrap() as usize,
            pieces.iter().filter(|p| p["access"] == "free").count()
        );
    }

    #[test]
    fn test_write_snapshot_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "stale contents that are much longer than nothing at all").unwrap();

        write_snapshot(&path, &CatalogSnapshot::with_timestamp("t", Vec::new())).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["total_pieces"], 0);
        assert_eq!(value["pieces"], json!([]));
    }

    #[test]
    fn test_write_snapshot_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("catalog.json");

        let err = write_snapshot(&path, &snapshot()).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(!path.exists());
    }
}
