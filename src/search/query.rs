//! Query normalization and the match predicate.

use crate::config::MIN_QUERY_CHARS;
use crate::models::{LexiconEntry, SearchParams};
use crate::search::paginate::{coerce_limit, coerce_offset};
use crate::search::{SearchError, SearchRequest};

/// Language filter resolved from the raw `language` parameter.
///
/// A missing or empty tag resolves to the wildcard. Any other tag passes
/// through unvalidated: an unrecognized language matches no entries, which
/// is an empty result rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageFilter {
    All,
    Tag(String),
}

impl LanguageFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some("all") => LanguageFilter::All,
            Some(tag) => LanguageFilter::Tag(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LanguageFilter::All => "all",
            LanguageFilter::Tag(tag) => tag,
        }
    }
}

/// The search predicate, built once per request and consumed by both the
/// count and the fetch. Counting and fetching through the same value makes
/// count/window disagreement impossible.
///
/// Matching is a case-insensitive substring test via Unicode lowercasing;
/// scripts without a case concept compare unchanged. No other normalization
/// is applied.
#[derive(Debug, Clone)]
pub struct MatchPredicate {
    needle: String,
    language: LanguageFilter,
}

impl MatchPredicate {
    pub fn new(query: &str, language: LanguageFilter) -> Self {
        Self {
            needle: query.to_lowercase(),
            language,
        }
    }

    /// True iff the entry satisfies the language filter and the query
    /// appears in its lemma, definition, or transliteration.
    pub fn matches(&self, entry: &LexiconEntry) -> bool {
        if let LanguageFilter::Tag(tag) = &self.language {
            if entry.language != *tag {
                return false;
            }
        }

        self.contains(&entry.lemma)
            || self.contains(&entry.definition)
            || entry
                .transliteration
                .as_deref()
                .is_some_and(|t| self.contains(t))
    }

    pub(crate) fn needle(&self) -> &str {
        &self.needle
    }

    fn contains(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Validate and resolve the raw request parameters.
///
/// The query string is matched verbatim (no trimming); only its length is
/// checked, counted in Unicode scalar values. Queries shorter than
/// [`MIN_QUERY_CHARS`] fail with `InvalidQuery` before any store access.
/// Pagination parameters coerce leniently instead of failing.
pub fn build_request(params: &SearchParams) -> Result<SearchRequest, SearchError> {
    let query = params.query.clone().unwrap_or_default();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Err(SearchError::InvalidQuery);
    }

    Ok(SearchRequest {
        query,
        language: LanguageFilter::parse(params.language.as_deref()),
        limit: coerce_limit(params.limit.as_deref()),
        offset: coerce_offset(params.offset.as_deref()),
    })
}
