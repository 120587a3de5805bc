use std::sync::Arc;

use crate::config::Config;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// The store is read-only after startup; handlers only ever clone the
/// `Arc`, so there is no shared mutable state between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<InMemoryStore>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = InMemoryStore::load(&config.lexicon_path)?;
        tracing::info!("Loaded {} lexicon entries", store.entry_count());

        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }
}
