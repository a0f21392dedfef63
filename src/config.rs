//! Client configuration.

/// Base URL of the Incompetech royalty-free catalog.
pub const DEFAULT_BASE_URL: &str = "https://incompetech.com/music/royalty-free";

/// Base URL audio files are served from.
pub const DEFAULT_DOWNLOAD_BASE: &str = "https://incompetech.com/music/royalty-free/mp3-royaltyfree";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("moodcat/", env!("CARGO_PKG_VERSION"));

/// Immutable settings for talking to the catalog.
///
/// Passed into [`CatalogClient`](crate::CatalogClient) and the URL scheme
/// instead of living in a shared session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Catalog base; `pieces.json` and metadata pages live under it.
    pub base_url: String,
    /// Prefix for `download_url`.
    pub download_base: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            download_base: DEFAULT_DOWNLOAD_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Set the catalog base URL. A trailing slash is dropped.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = trim_slash(base_url.into());
        self
    }

    /// Set the download base URL. A trailing slash is dropped.
    pub fn with_download_base<S: Into<String>>(mut self, download_base: S) -> Self {
        self.download_base = trim_slash(download_base.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// URL of the full pieces listing.
    pub fn pieces_url(&self) -> String {
        format!("{}/pieces.json", self.base_url)
    }
}

fn trim_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pieces_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.pieces_url(),
            "https://incompetech.com/music/royalty-free/pieces.json"
        );
    }

    #[test]
    fn test_builders_trim_trailing_slash() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:8080/")
            .with_download_base("http://cdn.local/mp3//");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.download_base, "http://cdn.local/mp3");
        assert_eq!(config.pieces_url(), "http://127.0.0.1:8080/pieces.json");
    }
}
