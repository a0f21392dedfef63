//! Catalog piece models.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys the enricher writes onto every piece.
const ENRICHED_KEYS: [&str; 3] = ["access", "download_url", "metadata_url"];

/// One catalog entry as returned by the pieces API.
///
/// The full JSON object is preserved. Only `filename` and `feel` are
/// interpreted by the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Piece {
    fields: Map<String, Value>,
}

impl Piece {
    /// Wrap an existing JSON object.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a piece from a JSON value, if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// All fields of the piece.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Look up a raw field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The audio filename (e.g. `"Carefree.mp3"`), if present and a string.
    pub fn filename(&self) -> Option<&str> {
        self.fields.get("filename").and_then(|v| v.as_str())
    }

    /// Free-text mood description. Missing or non-string values read as empty.
    pub fn feel(&self) -> &str {
        self.fields
            .get("feel")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Check whether `feel` contains any of the given keywords.
    ///
    /// `lowered_moods` must already be lowercase.
    pub fn matches_any_mood(&self, lowered_moods: &[String]) -> bool {
        let feel = self.feel().to_lowercase();
        lowered_moods.iter().any(|mood| feel.contains(mood.as_str()))
    }

    fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

/// Access tier assigned to a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Free,
    Pro,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Free => "free",
            Access::Pro => "pro",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece with its access tier and derived URLs attached.
///
/// Serializes as the original object with `access`, `download_url` and
/// `metadata_url` appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedPiece {
    #[serde(flatten)]
    pub piece: Piece,
    pub access: Access,
    pub download_url: String,
    pub metadata_url: String,
}

impl EnrichedPiece {
    /// Attach tier and URLs to a piece.
    ///
    /// Upstream values under the enriched keys are dropped so each key is
    /// written exactly once.
    pub fn new(piece: Piece, access: Access, download_url: String, metadata_url: String) -> Self {
        let mut fields = piece.into_fields();
        for key in ENRICHED_KEYS {
            fields.remove(key);
        }

        Self {
            piece: Piece::from_fields(fields),
            access,
            download_url,
            metadata_url,
        }
    }

    pub fn is_free(&self) -> bool {
        self.access == Access::Free
    }
}
