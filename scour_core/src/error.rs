// src/error.rs

/// Errors surfaced by engines and the shared transport.
///
/// There is no local recovery: every failure propagates unchanged to the
/// host, which logs it and drops the engine's results for that query round.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Engine configured with a result kind outside the supported set.
    /// Raised at configuration time, never after a network call.
    #[error("unsupported result kind: {0}")]
    UnsupportedKind(String),

    /// Expected array or required field absent or wrong-typed in the
    /// response body. Not retried.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
