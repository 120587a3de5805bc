//! Read-only entry storage.

pub mod memory;

use thiserror::Error;
use uuid::Uuid;

use crate::models::LexiconEntry;
use crate::search::query::MatchPredicate;

pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Abstract read-only provider of lexicon entries.
///
/// The search pipeline defines what matches (the predicate) and how matches
/// are ordered ([`crate::search::rank::compare`]); the store executes the
/// filtering and slicing. `count_matches` and `fetch_window` must apply the
/// predicate to the same logical snapshot so that the count and the window
/// never disagree; an implementation over mutable data owns that guarantee.
pub trait EntryStore: Send + Sync {
    /// Number of entries satisfying the predicate, independent of any window.
    fn count_matches(&self, predicate: &MatchPredicate) -> Result<usize, StoreError>;

    /// Entries `[offset, offset + limit)` of the full match set in relevance
    /// order. Empty when `offset` is at or past the end.
    fn fetch_window(
        &self,
        predicate: &MatchPredicate,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<LexiconEntry>, StoreError>;

    /// Look up a single entry by id.
    fn get(&self, id: Uuid) -> Result<Option<LexiconEntry>, StoreError>;

    /// Sorted distinct language tags present in the store.
    fn languages(&self) -> Result<Vec<String>, StoreError>;
}
