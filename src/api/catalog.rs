//! Incompetech catalog client.
//!
//! The catalog publishes its whole library as a single `pieces.json` array.
//! No authentication is required.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::error::{CatalogError, Result};
use crate::models::Piece;

/// Catalog API client.
///
/// # Example
///
/// ```rust,no_run
/// use moodcat::{CatalogClient, ClientConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CatalogClient::new(ClientConfig::default())?;
///     let calm = client.find_by_mood(&["relaxed"]).await?;
///     println!("{} relaxed pieces", calm.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    config: ClientConfig,
}

impl CatalogClient {
    /// Create a client for the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch every piece in the catalog, in server order.
    pub async fn fetch_all_pieces(&self) -> Result<Vec<Piece>> {
        let url = self.config.pieces_url();
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Catalog API returned {} for {}", status, url);
            return Err(CatalogError::Response { status, url });
        }

        let body = response.text().await?;
        let pieces: Vec<Piece> = serde_json::from_str(&body)?;
        info!("Fetched {} pieces from catalog", pieces.len());

        Ok(pieces)
    }

    /// Fetch the catalog and keep pieces whose feel matches any mood.
    pub async fn find_by_mood<S: AsRef<str>>(&self, moods: &[S]) -> Result<Vec<Piece>> {
        let pieces = self.fetch_all_pieces().await?;
        let matched = filter_by_mood(pieces, moods);
        debug!("{} pieces matched moods", matched.len());
        Ok(matched)
    }
}

/// Keep pieces whose `feel` contains, case-insensitively, any of `moods`.
///
/// Order is preserved.
pub fn filter_by_mood<S: AsRef<str>>(pieces: Vec<Piece>, moods: &[S]) -> Vec<Piece> {
    let lowered: Vec<String> = moods.iter().map(|m| m.as_ref().to_lowercase()).collect();
    pieces
        .into_iter()
        .filter(|piece| piece.matches_any_mood(&lowered))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port, serve_once};
    use serde_json::json;

    fn pieces(value: serde_json::Value) -> Vec<Piece> {
        serde_json::from_value(value).unwrap()
    }

    fn filenames(pieces: &[Piece]) -> Vec<&str> {
        pieces.iter().filter_map(|p| p.filename()).collect()
    }

    #[test]
    fn test_filter_by_mood_keeps_order() {
        let all = pieces(json!([
            {"filename": "a.mp3", "feel": "Bright and fun"},
            {"filename": "b.mp3", "feel": "Dark"},
            {"filename": "c.mp3", "feel": "Uplifting"},
        ]));
        let matched = filter_by_mood(all, &["bright", "uplifting"]);
        assert_eq!(filenames(&matched), vec!["a.mp3", "c.mp3"]);
    }

    #[test]
    fn test_filter_by_mood_case_insensitive_keywords() {
        let all = pieces(json!([
            {"filename": "a.mp3", "feel": "relaxed, mellow"},
            {"filename": "b.mp3", "feel": "RELAXED"},
            {"filename": "c.mp3"},
            {"filename": "d.mp3", "feel": null},
        ]));
        let matched = filter_by_mood(all, &["Relaxed"]);
        assert_eq!(filenames(&matched), vec!["a.mp3", "b.mp3"]);
    }

    #[test]
    fn test_filter_by_mood_no_moods() {
        let all = pieces(json!([{"filename": "a.mp3", "feel": "Bright"}]));
        let none: [&str; 0] = [];
        assert!(filter_by_mood(all, &none).is_empty());
    }

    #[test]
    fn test_filter_by_mood_empty_keyword_matches_all() {
        let all = pieces(json!([
            {"filename": "a.mp3", "feel": "Bright"},
            {"filename": "b.mp3"},
        ]));
        assert_eq!(filter_by_mood(all, &[""]).len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_pieces() {
        let body = json!([
            {"filename": "a.mp3", "feel": "Bright", "title": "A"},
            {"filename": "b.mp3", "feel": "Dark"},
        ])
        .to_string();
        let base = serve_once("200 OK", &body).await;
        let client = CatalogClient::new(ClientConfig::default().with_base_url(base)).unwrap();

        let fetched = client.fetch_all_pieces().await.unwrap();
        assert_eq!(filenames(&fetched), vec!["a.mp3", "b.mp3"]);
        assert_eq!(fetched[0].get("title"), Some(&json!("A")));
    }

    #[tokio::test]
    async fn test_find_by_mood() {
        let body = json!([
            {"filename": "a.mp3", "feel": "Bright and fun"},
            {"filename": "b.mp3", "feel": "Dark"},
            {"filename": "c.mp3", "feel": "Uplifting"},
        ])
        .to_string();
        let base = serve_once("200 OK", &body).await;
        let client = CatalogClient::new(ClientConfig::default().with_base_url(base)).unwrap();

        let matched = client.find_by_mood(&["bright", "uplifting"]).await.unwrap();
        assert_eq!(filenames(&matched), vec!["a.mp3", "c.mp3"]);
    }

    #[tokio::test]
    async fn test_error_status_is_response_error() {
        let base = serve_once("503 Service Unavailable", "{}").await;
        let client = CatalogClient::new(ClientConfig::default().with_base_url(base)).unwrap();

        match client.fetch_all_pieces().await {
            Err(CatalogError::Response { status, url }) => {
                assert_eq!(status.as_u16(), 503);
                assert!(url.ends_with("/pieces.json"));
            }
            other => panic!("expected response error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let base = closed_port().await;
        let client = CatalogClient::new(ClientConfig::default().with_base_url(base)).unwrap();

        let err = client.fetch_all_pieces().await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
        assert!(err.is_api_error());
    }

    #[tokio::test]
    async fn test_non_array_body_is_parse_error() {
        let base = serve_once("200 OK", r#"{"pieces": []}"#).await;
        let client = CatalogClient::new(ClientConfig::default().with_base_url(base)).unwrap();

        let err = client.fetch_all_pieces().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(!err.is_api_error());
    }
}
