//! Key-value backend the cache stores are written against.
//!
//! [`RedisPool`](crate::RedisPool) is the production backend. [`MemoryCache`]
//! keeps entries in process for service tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::pool::CacheResult;

/// String key-value store with optional expiry
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<Option<String>>;

    /// Values in key order, `None` for missing keys
    async fn get_many_raw(&self, keys: &[String]) -> CacheResult<Vec<Option<String>>>;

    async fn set_raw(&self, key: &str, value: String, ttl_seconds: Option<u64>) -> CacheResult<()>;

    async fn delete(&self, key: &str) -> CacheResult<bool>;

    async fn exists(&self, key: &str) -> CacheResult<bool>;
}

pub type SharedCacheBackend = Arc<dyn CacheBackend>;

/// Read and decode a JSON value
pub(crate) async fn read_json<V: DeserializeOwned>(
    backend: &dyn CacheBackend,
    key: &str,
) -> CacheResult<Option<V>> {
    match backend.get_raw(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON value
pub(crate) async fn write_json<V: Serialize + ?Sized>(
    backend: &dyn CacheBackend,
    key: &str,
    value: &V,
    ttl_seconds: Option<u64>,
) -> CacheResult<()> {
    let raw = serde_json::to_string(value)?;
    backend.set_raw(key, raw, ttl_seconds).await
}

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl MemoryEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| at > now)
    }
}

/// In-process backend
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, MemoryEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedCacheBackend {
        Arc::new(Self::new())
    }

    /// Number of live entries
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.is_live(now))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get_raw(&self, key: &str) -> CacheResult<Option<String>> {
        let now = Instant::now();
        Ok(self
            .entries
            .read()
            .await
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone()))
    }

    async fn get_many_raw(&self, keys: &[String]) -> CacheResult<Vec<Option<String>>> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(keys
            .iter()
            .map(|key| {
                entries
                    .get(key)
                    .filter(|entry| entry.is_live(now))
                    .map(|entry| entry.value.clone())
            })
            .collect())
    }

    async fn set_raw(&self, key: &str, value: String, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let now = Instant::now();
        let expires_at =
            ttl_seconds.and_then(|ttl| now.checked_add(Duration::from_secs(ttl)));

        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.is_live(now));
        entries.insert(key.to_string(), MemoryEntry { value, expires_at });
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> CacheResult<bool> {
        Ok(self.get_raw(key).await?.is_some())
    }
}
