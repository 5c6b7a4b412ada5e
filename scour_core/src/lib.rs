// src/lib.rs
pub mod client;
pub mod engines;
pub mod error;
pub mod text;
pub mod types;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

pub use crate::client::SearchClient;
pub use crate::error::EngineError;
pub use crate::types::{About, Category, RequestDescriptor, SearchQuery, SearchResult};

/// A single search engine connector.
///
/// Engines translate a query into one outbound request and map the raw
/// response body into normalized [`SearchResult`]s. They hold no mutable
/// state, so a configured engine can serve concurrent queries; fan-out,
/// merging, ranking, caching and rate limiting all live with the host.
pub trait Engine: Send + Sync {
    /// Unique engine name used for registry lookup (e.g. "lemmy posts").
    fn name(&self) -> &'static str;

    /// Static metadata about the engine and its upstream service.
    fn about(&self) -> About;

    /// Routing tags the host uses to decide which engines a query reaches.
    fn categories(&self) -> &'static [Category];

    /// Whether the engine understands 1-based page numbers past the first.
    fn supports_paging(&self) -> bool {
        false
    }

    /// Builds the outbound request for `query`. Deterministic and free of
    /// side effects; the transport is owned by [`SearchClient`].
    fn build_request(&self, query: &SearchQuery) -> Result<RequestDescriptor, EngineError>;

    /// Maps a parsed response body into an ordered result list. Order is
    /// whatever the upstream API returned; no local re-sorting.
    fn parse_response(&self, body: &Value) -> Result<Vec<SearchResult>, EngineError>;
}

/// Name-keyed collection of configured engines.
#[derive(Default)]
pub struct EngineRegistry {
    engines: HashMap<String, Arc<dyn Engine>>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, engine: Arc<dyn Engine>) {
        self.engines.insert(engine.name().to_string(), engine);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Engine>> {
        self.engines.get(name).cloned()
    }

    /// Registered engine names, sorted for stable display.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.engines.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All engines tagged with `category`.
    pub fn by_category(&self, category: Category) -> Vec<Arc<dyn Engine>> {
        self.engines
            .values()
            .filter(|engine| engine.categories().contains(&category))
            .cloned()
            .collect()
    }
}

#[cfg(all(test, feature = "lemmy"))]
mod tests {
    use super::*;
    use crate::engines::lemmy::{LemmyEngine, LemmyKind};

    #[test]
    fn registry_lookup_and_listing() {
        let mut registry = EngineRegistry::new();
        for kind in LemmyKind::ALL {
            registry.register(Arc::new(LemmyEngine::with_kind(kind)));
        }

        assert_eq!(
            registry.names(),
            vec![
                "lemmy comments",
                "lemmy communities",
                "lemmy posts",
                "lemmy users",
            ]
        );

        let posts = registry.get("lemmy posts").unwrap();
        assert!(posts.supports_paging());
        assert!(registry.get("lemmy gifs").is_none());
    }

    #[test]
    fn registry_filters_by_category() {
        let mut registry = EngineRegistry::new();
        registry.register(Arc::new(LemmyEngine::with_kind(LemmyKind::Communities)));
        registry.register(Arc::new(LemmyEngine::with_kind(LemmyKind::Comments)));

        assert_eq!(registry.by_category(Category::SocialMedia).len(), 2);
        assert_eq!(registry.by_category(Category::General).len(), 2);
        assert!(registry.by_category(Category::Science).is_empty());
    }
}
