use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use uuid::Uuid;

use crate::models::LexiconEntry;
use crate::search::query::MatchPredicate;
use crate::search::rank;
use crate::store::{EntryStore, StoreError};

/// In-memory entry store seeded from a JSON file at startup.
///
/// The entry set is immutable after load, so every read sees the same
/// snapshot and concurrent access needs no locking. Counting and fetching
/// against the same `Arc`'d slice makes them consistent by construction.
#[derive(Clone)]
pub struct InMemoryStore {
    entries: Arc<Vec<LexiconEntry>>,
}

impl InMemoryStore {
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Load the lexicon from a JSON array of entries. A missing file yields
    /// an empty store; a present but unparsable file is a startup error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::warn!("Lexicon file {} not found, starting empty", path.display());
            return Ok(Self::from_entries(Vec::new()));
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let entries: Vec<LexiconEntry> = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse lexicon file {}", path.display()))?;

        Ok(Self::from_entries(entries))
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// All matches in relevance order.
    fn ranked_matches(&self, predicate: &MatchPredicate) -> Vec<&LexiconEntry> {
        let mut matched: Vec<&LexiconEntry> = self
            .entries
            .iter()
            .filter(|e| predicate.matches(e))
            .collect();
        matched.sort_by(|a, b| rank::compare(predicate, a, b));
        matched
    }
}

impl EntryStore for InMemoryStore {
    fn count_matches(&self, predicate: &MatchPredicate) -> Result<usize, StoreError> {
        Ok(self.entries.iter().filter(|e| predicate.matches(e)).count())
    }

    fn fetch_window(
        &self,
        predicate: &MatchPredicate,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<LexiconEntry>, StoreError> {
        Ok(self
            .ranked_matches(predicate)
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn get(&self, id: Uuid) -> Result<Option<LexiconEntry>, StoreError> {
        Ok(self.entries.iter().find(|e| e.id == id).cloned())
    }

    fn languages(&self) -> Result<Vec<String>, StoreError> {
        let mut tags: Vec<String> = self.entries.iter().map(|e| e.language.clone()).collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }
}
