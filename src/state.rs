//! Shared application state.

use crate::config::ServerConfig;
use crate::store::{Collection, DocumentStore, MemoryStore};
use std::sync::Arc;

/// State shared by every request handler: the configuration, the store
/// handle, and one collection adapter per resource type. Constructed once at
/// startup and injected via axum `State`; the store is never reached through
/// globals.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub store: Arc<dyn DocumentStore>,
    pub films: Collection,
    pub planets: Collection,
    pub starships: Collection,
}

impl AppState {
    /// State over the default in-memory backend.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    /// State over an explicit store handle. Tests use this to inject store
    /// doubles behind the same adapter seam.
    pub fn with_store(config: ServerConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config: Arc::new(config),
            films: Collection::new(store.clone(), "films"),
            planets: Collection::new(store.clone(), "planets"),
            starships: Collection::new(store.clone(), "starships"),
            store,
        }
    }
}
