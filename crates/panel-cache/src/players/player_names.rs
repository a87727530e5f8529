//! Per-identifier player name cache used to decorate listings.

use std::collections::HashMap;

use crate::backend::SharedCacheBackend;
use crate::pool::CacheResult;

/// Key prefix for cached player names
const PLAYER_NAME_PREFIX: &str = "player_name:";

/// Default TTL for cached names (1 day)
const DEFAULT_PLAYER_NAME_TTL: u64 = 24 * 60 * 60;

#[derive(Clone)]
pub struct PlayerNameStore {
    backend: SharedCacheBackend,
    ttl_seconds: u64,
}

impl PlayerNameStore {
    #[must_use]
    pub fn new(backend: SharedCacheBackend) -> Self {
        Self {
            backend,
            ttl_seconds: DEFAULT_PLAYER_NAME_TTL,
        }
    }

    #[must_use]
    pub fn with_ttl(backend: SharedCacheBackend, ttl_seconds: u64) -> Self {
        Self {
            backend,
            ttl_seconds,
        }
    }

    fn key(identifier: &str) -> String {
        format!("{PLAYER_NAME_PREFIX}{identifier}")
    }

    /// Cached names for the given identifiers; misses are left out
    pub async fn get_many(&self, identifiers: &[String]) -> CacheResult<HashMap<String, String>> {
        let keys: Vec<String> = identifiers.iter().map(|id| Self::key(id)).collect();
        let values = self.backend.get_many_raw(&keys).await?;

        Ok(identifiers
            .iter()
            .zip(values)
            .filter_map(|(identifier, name)| name.map(|name| (identifier.clone(), name)))
            .collect())
    }

    pub async fn put(&self, identifier: &str, name: &str) -> CacheResult<()> {
        self.backend
            .set_raw(&Self::key(identifier), name.to_string(), Some(self.ttl_seconds))
            .await
    }

    pub async fn put_many(&self, names: &HashMap<String, String>) -> CacheResult<()> {
        for (identifier, name) in names {
            self.put(identifier, name).await?;
        }

        if !names.is_empty() {
            tracing::debug!(count = names.len(), "Cached player names");
        }
        Ok(())
    }
}

impl std::fmt::Debug for PlayerNameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerNameStore")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
