//! Shared HTTP transport for engines.

use serde_json::Value;

use crate::error::EngineError;
use crate::types::{SearchQuery, SearchResult};
use crate::Engine;

/// Owns the `reqwest` client engines describe requests against.
///
/// One request/response cycle per call, no retries; transport failures and
/// non-2xx statuses propagate to the caller unmodified.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Reuse an existing client, e.g. one with host-level timeouts applied.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Runs `query` against `engine`: build the request, fetch, parse.
    pub async fn run(
        &self,
        engine: &dyn Engine,
        query: &SearchQuery,
    ) -> Result<Vec<SearchResult>, EngineError> {
        let request = engine.build_request(query)?;
        tracing::debug!(engine = engine.name(), url = %request.url, "dispatching search");

        let body = self
            .http
            .get(request.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        engine.parse_response(&body)
    }
}
