//! Searches a Lemmy instance through its `api/v3/search` endpoint, which is
//! documented by `lemmy-js-client` (<https://join-lemmy.org/api/>).
//!
//! Lemmy is federated, so results come from many independent instances, not
//! only the one queried. A configured engine searches exactly one of the
//! four entity kinds; hosts that want all four register four engines (same
//! instance, different [`LemmyKind`]), mirroring how the upstream service
//! distinguishes `Communities`, `Users`, `Posts` and `Comments` searches.

use std::str::FromStr;

use serde_json::Value;
use url::Url;

use crate::error::EngineError;
use crate::text::render_excerpt;
use crate::types::{About, Category, RequestDescriptor, SearchQuery, SearchResult};
use crate::Engine;

/// Instance queried when no `base_url` is configured.
pub const DEFAULT_INSTANCE: &str = "https://lemmy.ml/";

const SEARCH_PATH: &str = "api/v3/search";

const CATEGORIES: &[Category] = &[Category::General, Category::SocialMedia];

/// Which of the four Lemmy entity kinds an engine instance searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LemmyKind {
    Communities,
    Users,
    Posts,
    Comments,
}

impl LemmyKind {
    pub const ALL: [LemmyKind; 4] = [
        LemmyKind::Communities,
        LemmyKind::Users,
        LemmyKind::Posts,
        LemmyKind::Comments,
    ];

    /// The value sent as the `type_` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            LemmyKind::Communities => "Communities",
            LemmyKind::Users => "Users",
            LemmyKind::Posts => "Posts",
            LemmyKind::Comments => "Comments",
        }
    }

    fn fields(&self) -> &'static FieldMap {
        match self {
            LemmyKind::Communities => &COMMUNITIES_FIELDS,
            LemmyKind::Users => &USERS_FIELDS,
            LemmyKind::Posts => &POSTS_FIELDS,
            LemmyKind::Comments => &COMMENTS_FIELDS,
        }
    }
}

impl FromStr for LemmyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Communities" => Ok(LemmyKind::Communities),
            "Users" => Ok(LemmyKind::Users),
            "Posts" => Ok(LemmyKind::Posts),
            "Comments" => Ok(LemmyKind::Comments),
            other => Err(EngineError::UnsupportedKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for LemmyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where each piece of a normalized result lives in the response body.
///
/// Every array element nests one entity object (`community`, `person`,
/// `post` or `comment`). Adding a fifth kind is a table edit, not new
/// control flow.
struct FieldMap {
    /// Top-level array holding this kind's results.
    array: &'static str,
    /// Key of the nested entity object within each element.
    entity: &'static str,
    url: &'static str,
    /// Entity the title is read from. For comments this is the sibling
    /// `post`, not the comment itself; the upstream response nests each
    /// comment next to its post and comments have no title of their own.
    title_entity: &'static str,
    title: &'static str,
    content: &'static str,
    /// Required fields fail the parse when absent; optional ones default
    /// to an empty excerpt.
    content_required: bool,
}

static COMMUNITIES_FIELDS: FieldMap = FieldMap {
    array: "communities",
    entity: "community",
    url: "actor_id",
    title_entity: "community",
    title: "title",
    content: "description",
    content_required: false,
};

static USERS_FIELDS: FieldMap = FieldMap {
    array: "users",
    entity: "person",
    url: "actor_id",
    title_entity: "person",
    title: "name",
    content: "bio",
    content_required: false,
};

static POSTS_FIELDS: FieldMap = FieldMap {
    array: "posts",
    entity: "post",
    url: "ap_id",
    title_entity: "post",
    title: "name",
    content: "body",
    content_required: false,
};

static COMMENTS_FIELDS: FieldMap = FieldMap {
    array: "comments",
    entity: "comment",
    url: "ap_id",
    title_entity: "post",
    title: "name",
    content: "content",
    content_required: true,
};

/// Immutable per-engine configuration, fixed at construction.
#[derive(Debug, Clone)]
pub struct LemmyConfig {
    pub base_url: Url,
    pub kind: LemmyKind,
}

impl Default for LemmyConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_INSTANCE).expect("default instance URL parses"),
            kind: LemmyKind::Communities,
        }
    }
}

impl LemmyConfig {
    /// Builds a configuration from the host's raw settings strings.
    ///
    /// An unknown kind fails here with [`EngineError::UnsupportedKind`],
    /// before any network call can happen.
    pub fn new(base_url: &str, kind: &str) -> Result<Self, EngineError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            kind: kind.parse()?,
        })
    }
}

/// Engine for one `(instance, kind)` pair.
pub struct LemmyEngine {
    config: LemmyConfig,
}

impl LemmyEngine {
    pub fn new(config: LemmyConfig) -> Self {
        Self { config }
    }

    /// Engine against the default instance for the given kind.
    pub fn with_kind(kind: LemmyKind) -> Self {
        Self::new(LemmyConfig {
            kind,
            ..LemmyConfig::default()
        })
    }

    pub fn kind(&self) -> LemmyKind {
        self.config.kind
    }
}

impl Engine for LemmyEngine {
    fn name(&self) -> &'static str {
        match self.config.kind {
            LemmyKind::Communities => "lemmy communities",
            LemmyKind::Users => "lemmy users",
            LemmyKind::Posts => "lemmy posts",
            LemmyKind::Comments => "lemmy comments",
        }
    }

    fn about(&self) -> About {
        About {
            website: "https://lemmy.ml/",
            wikidata_id: Some("Q84777032"),
            official_api_documentation: Some("https://join-lemmy.org/api/"),
            use_official_api: true,
            require_api_key: false,
        }
    }

    fn categories(&self) -> &'static [Category] {
        CATEGORIES
    }

    fn supports_paging(&self) -> bool {
        true
    }

    fn build_request(&self, query: &SearchQuery) -> Result<RequestDescriptor, EngineError> {
        let page = query.page.to_string();
        let endpoint = format!("{}{}", self.config.base_url, SEARCH_PATH);
        let url = Url::parse_with_params(
            &endpoint,
            [
                ("q", query.query.as_str()),
                ("page", page.as_str()),
                ("type_", self.config.kind.as_str()),
            ],
        )?;

        Ok(RequestDescriptor::get(url))
    }

    fn parse_response(&self, body: &Value) -> Result<Vec<SearchResult>, EngineError> {
        let fields = self.config.kind.fields();
        let rows = body
            .get(fields.array)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                EngineError::MalformedResponse(format!("missing `{}` array", fields.array))
            })?;

        rows.iter()
            .map(|row| {
                let url = required_str(row, fields.entity, fields.url)?;
                let title = required_str(row, fields.title_entity, fields.title)?;
                let content = if fields.content_required {
                    required_str(row, fields.entity, fields.content)?
                } else {
                    optional_str(row, fields.entity, fields.content)
                };

                Ok(SearchResult {
                    url: url.to_owned(),
                    title: title.to_owned(),
                    content: render_excerpt(content),
                })
            })
            .collect()
    }
}

fn required_str<'a>(row: &'a Value, entity: &str, field: &str) -> Result<&'a str, EngineError> {
    row.get(entity)
        .and_then(|e| e.get(field))
        .and_then(Value::as_str)
        .ok_or_else(|| EngineError::MalformedResponse(format!("missing `{entity}.{field}`")))
}

fn optional_str<'a>(row: &'a Value, entity: &str, field: &str) -> &'a str {
    row.get(entity)
        .and_then(|e| e.get(field))
        .and_then(Value::as_str)
        .unwrap_or("")
}
