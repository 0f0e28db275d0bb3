//! Runtime API configuration for the browser client.
//!
//! The SSR host renders the backend base URL into a `<meta>` tag; the hydrated
//! client reads it back once at startup. Without a browser (tests, SSR) the
//! default `/api` is used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the `<meta>` tag carrying the API base URL.
pub const API_BASE_META: &str = "strikers-yard-api-base";
/// Base URL used when nothing is configured.
pub const DEFAULT_API_BASE: &str = "/api";

/// Where the booking backend's REST endpoints live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Build a config from a raw base URL. Trailing slashes are trimmed and a
    /// blank value falls back to [`DEFAULT_API_BASE`].
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path (starting with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Read the config from the document's meta tag.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_BASE_META}\"]");
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
                .map_or_else(Self::default, |raw| Self::new(&raw))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
