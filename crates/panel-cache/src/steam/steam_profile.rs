//! Cached Steam Web API player summaries.

use serde::{Deserialize, Serialize};

use crate::backend::{read_json, write_json, SharedCacheBackend};
use crate::pool::CacheResult;

/// Key prefix for Steam profiles
const STEAM_PROFILE_PREFIX: &str = "steam_user:";

/// Default TTL for Steam profiles (1 day)
const DEFAULT_STEAM_PROFILE_TTL: u64 = 24 * 60 * 60;

/// The parts of a Steam player summary the panel shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamProfile {
    pub steam_id: String,
    pub persona_name: String,
    pub profile_url: String,
    /// Full size avatar URL
    pub avatar: Option<String>,
    /// Unix seconds when the summary was fetched
    pub fetched_at: i64,
}

impl SteamProfile {
    pub fn new(steam_id: impl Into<String>, persona_name: impl Into<String>) -> Self {
        Self {
            steam_id: steam_id.into(),
            persona_name: persona_name.into(),
            profile_url: String::new(),
            avatar: None,
            fetched_at: chrono::Utc::now().timestamp(),
        }
    }
}

#[derive(Clone)]
pub struct SteamProfileStore {
    backend: SharedCacheBackend,
    ttl_seconds: u64,
}

impl SteamProfileStore {
    #[must_use]
    pub fn new(backend: SharedCacheBackend) -> Self {
        Self {
            backend,
            ttl_seconds: DEFAULT_STEAM_PROFILE_TTL,
        }
    }

    #[must_use]
    pub fn with_ttl(backend: SharedCacheBackend, ttl_seconds: u64) -> Self {
        Self {
            backend,
            ttl_seconds,
        }
    }

    fn key(steam64: u64) -> String {
        format!("{STEAM_PROFILE_PREFIX}{steam64}")
    }

    pub async fn get(&self, steam64: u64) -> CacheResult<Option<SteamProfile>> {
        read_json(self.backend.as_ref(), &Self::key(steam64)).await
    }

    pub async fn put(&self, steam64: u64, profile: &SteamProfile) -> CacheResult<()> {
        write_json(
            self.backend.as_ref(),
            &Self::key(steam64),
            profile,
            Some(self.ttl_seconds),
        )
        .await?;

        tracing::debug!(steam64, "Cached steam profile");
        Ok(())
    }
}

impl std::fmt::Debug for SteamProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamProfileStore")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
