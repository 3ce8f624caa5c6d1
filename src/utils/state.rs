use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::models::cache::CacheEntry;
use crate::models::error::Error;
use crate::query::QueryEngine;
use crate::store::Dataset;
use crate::utils::config::Config;

pub struct AppState {
    pub engine: QueryEngine,
    pub config: Config,
    pub response_cache: DashMap<String, CacheEntry<Value>>,
}

impl AppState {
    pub fn new(config: Config, dataset: Dataset) -> Self {
        AppState {
            engine: QueryEngine::new(Arc::new(dataset)),
            config,
            response_cache: DashMap::new(),
        }
    }

    /// Runs `query` against the engine, memoizing the serialized answer under `key`.
    pub fn cached<T, F>(&self, key: String, query: F) -> Result<Value, Error>
    where
        T: Serialize,
        F: FnOnce(&QueryEngine) -> T,
    {
        let ttl = self.config.cache_ttl_seconds;
        if ttl > 0 {
            let hit = self
                .response_cache
                .get(&key)
                .filter(|entry| !entry.is_expired())
                .map(|entry| entry.value.clone());
            if let Some(value) = hit {
                debug!(%key, "cache hit");
                return Ok(value);
            }
        }

        let value = serde_json::to_value(query(&self.engine))?;
        // Empty answers (ids that match nothing) are never memoized.
        let empty = value.as_array().is_some_and(|rows| rows.is_empty());
        if ttl > 0 && !empty {
            self.remember(key, value.clone(), ttl);
        }
        Ok(value)
    }

    /// Stores an entry while keeping the cache within `cache_max_entries`. Expired
    /// entries are swept only once the cache is full; if it is still full afterwards
    /// the new entry is not kept.
    fn remember(&self, key: String, value: Value, ttl: i64) {
        let max_entries = self.config.cache_max_entries;
        if self.response_cache.len() >= max_entries && !self.response_cache.contains_key(&key) {
            self.response_cache.retain(|_, entry| !entry.is_expired());
            if self.response_cache.len() >= max_entries {
                debug!(%key, max_entries, "cache full, not memoizing");
                return;
            }
        }
        self.response_cache.insert(key, CacheEntry::new(value, ttl));
    }
}
