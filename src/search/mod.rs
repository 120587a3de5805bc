//! The search pipeline: normalize, match, rank, paginate, assemble.

pub mod paginate;
pub mod query;
pub mod rank;

use thiserror::Error;

use crate::config::MIN_QUERY_CHARS;
use crate::models::{LexiconEntry, SearchParams};
use crate::search::paginate::{page_info, PaginationInfo};
use crate::search::query::{LanguageFilter, MatchPredicate};
use crate::store::{EntryStore, StoreError};

/// A validated, resolved search request.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// The query string exactly as received (never trimmed)
    pub query: String,
    pub language: LanguageFilter,
    pub limit: usize,
    pub offset: usize,
}

/// The ranked window plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub entries: Vec<LexiconEntry>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("query must be at least {MIN_QUERY_CHARS} characters")]
    InvalidQuery,
    #[error("entry store failure: {0}")]
    Store(#[from] StoreError),
}

/// Run one search call end to end: validate the raw parameters, then count
/// and fetch against the store.
///
/// Validation failures short-circuit before any store access. Returns the
/// resolved request alongside the result so callers can echo the query and
/// language back.
pub fn run<S>(store: &S, params: &SearchParams) -> Result<(SearchRequest, SearchResult), SearchError>
where
    S: EntryStore + ?Sized,
{
    let request = query::build_request(params)?;
    let result = execute(store, &request)?;
    Ok((request, result))
}

/// Execute a validated request. The count and the window fetch consume the
/// same predicate value, so they can never disagree about what matches.
pub fn execute<S>(store: &S, request: &SearchRequest) -> Result<SearchResult, SearchError>
where
    S: EntryStore + ?Sized,
{
    let predicate = MatchPredicate::new(&request.query, request.language.clone());

    let total = store.count_matches(&predicate)?;
    let entries = if request.offset >= total {
        Vec::new()
    } else {
        store.fetch_window(&predicate, request.limit, request.offset)?
    };

    Ok(SearchResult {
        entries,
        pagination: page_info(total, request.limit, request.offset),
    })
}
