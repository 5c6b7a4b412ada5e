//! Core types shared by all engines.

use serde::{Deserialize, Serialize};
use url::Url;

/// Routing tags attached to engines. The host fans a query out to every
/// engine whose categories intersect the query's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    General,
    SocialMedia,
    News,
    It,
    Science,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::SocialMedia => "social media",
            Category::News => "news",
            Category::It => "it",
            Category::Science => "science",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata describing an engine and the service behind it.
#[derive(Debug, Clone)]
pub struct About {
    pub website: &'static str,
    pub wikidata_id: Option<&'static str>,
    pub official_api_documentation: Option<&'static str>,
    pub use_official_api: bool,
    pub require_api_key: bool,
}

/// A free-text query plus the caller's pagination state.
///
/// Empty query strings are passed through unvalidated; rejecting them is the
/// host's call, not the engine's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,

    /// 1-based page number.
    pub page: u32,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// A fully-formed outbound request.
///
/// Engines only describe the request; issuing it (and everything that comes
/// with it: timeouts, pooling, TLS) belongs to the transport. Requests are
/// always sent as GET with no custom headers, body or auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub url: Url,
}

impl RequestDescriptor {
    pub fn get(url: Url) -> Self {
        Self { url }
    }
}

/// A normalized search result handed back to the host.
///
/// Results carry no identity beyond the URL and are recomputed per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Canonical identifier URI of the entity.
    pub url: String,
    pub title: String,
    /// Plain-text excerpt, already stripped of markup.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builder_defaults_to_first_page() {
        let query = SearchQuery::new("rust");
        assert_eq!(query.page, 1);

        let query = query.with_page(5);
        assert_eq!(query.query, "rust");
        assert_eq!(query.page, 5);
    }

    #[test]
    fn category_display_matches_host_tags() {
        assert_eq!(Category::SocialMedia.to_string(), "social media");
        assert_eq!(Category::General.to_string(), "general");
    }
}
