//! Profiles of masked identities, keyed by the real steam identifier.
//!
//! A masked profile is only resolvable while its owner is online under the
//! alias, so the last built profile is kept for a long time and served when
//! the alias is offline.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::{read_json, write_json, SharedCacheBackend};
use crate::pool::CacheResult;

/// Key prefix for masked profiles
const MASKED_PROFILE_PREFIX: &str = "fake_";

/// Three months, in seconds
pub const MASKED_PROFILE_TTL: u64 = 3 * 30 * 24 * 60 * 60;

#[derive(Clone)]
pub struct MaskedProfileStore {
    backend: SharedCacheBackend,
    ttl_seconds: u64,
}

impl MaskedProfileStore {
    #[must_use]
    pub fn new(backend: SharedCacheBackend) -> Self {
        Self {
            backend,
            ttl_seconds: MASKED_PROFILE_TTL,
        }
    }

    /// Cache key for the real identifier behind a mask
    pub fn key(real_identifier: &str) -> String {
        format!("{MASKED_PROFILE_PREFIX}{real_identifier}")
    }

    pub async fn get<P: DeserializeOwned>(&self, real_identifier: &str) -> CacheResult<Option<P>> {
        read_json(self.backend.as_ref(), &Self::key(real_identifier)).await
    }

    /// Write the profile, restarting its expiry
    pub async fn put<P: Serialize>(&self, real_identifier: &str, profile: &P) -> CacheResult<()> {
        write_json(
            self.backend.as_ref(),
            &Self::key(real_identifier),
            profile,
            Some(self.ttl_seconds),
        )
        .await?;

        tracing::debug!(real_identifier = %real_identifier, "Stored masked profile");
        Ok(())
    }

    pub async fn exists(&self, real_identifier: &str) -> CacheResult<bool> {
        self.backend.exists(&Self::key(real_identifier)).await
    }
}

impl std::fmt::Debug for MaskedProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaskedProfileStore")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
