use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::search::paginate::PaginationInfo;

/// One dictionary record: headword plus gloss and metadata.
///
/// Entries are immutable once loaded; the search pipeline only ever borrows
/// them. `lemma` and `definition` are non-empty by contract with the seed
/// data; `frequency` defaults to 0 when the seed omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconEntry {
    pub id: Uuid,
    /// Canonical headword in the entry's own script
    pub lemma: String,
    /// Romanized form, where one exists
    #[serde(default)]
    pub transliteration: Option<String>,
    /// Free-text gloss
    pub definition: String,
    /// Language tag, e.g. "latin" or "greek". `"all"` is a query-side
    /// wildcard and never a stored value.
    pub language: String,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    /// Usage-frequency score; higher = more common
    #[serde(default)]
    pub frequency: u64,
    #[serde(default)]
    pub era: Option<String>,
    #[serde(default)]
    pub etymology: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Raw query-string parameters for GET /api/lexicon/search.
///
/// `limit` and `offset` arrive as strings so that non-numeric values coerce
/// to defaults instead of failing extraction; malformed pagination input is
/// not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub language: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Search response payload.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub entries: Vec<LexiconEntry>,
    pub pagination: PaginationInfo,
    /// Echo of the query string as matched (verbatim, untrimmed)
    pub query: String,
    /// Resolved language filter: `"all"` or the tag that was applied
    pub language: String,
}

/// Structured error body: `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
