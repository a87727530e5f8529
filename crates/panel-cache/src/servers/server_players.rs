//! Per-server cache of the fetched player lists.

use panel_core::ServerPlayer;

use crate::backend::{read_json, write_json, SharedCacheBackend};
use crate::pool::CacheResult;

/// Key prefix for server player lists
const SERVER_PLAYERS_PREFIX: &str = "server_players:";

/// Default TTL for a server player list
const DEFAULT_SERVER_PLAYERS_TTL: u64 = 10;

/// Player list cache keyed by server address
#[derive(Clone)]
pub struct ServerPlayerCache {
    backend: SharedCacheBackend,
    ttl_seconds: u64,
}

impl ServerPlayerCache {
    #[must_use]
    pub fn new(backend: SharedCacheBackend) -> Self {
        Self {
            backend,
            ttl_seconds: DEFAULT_SERVER_PLAYERS_TTL,
        }
    }

    #[must_use]
    pub fn with_ttl(backend: SharedCacheBackend, ttl_seconds: u64) -> Self {
        Self {
            backend,
            ttl_seconds,
        }
    }

    fn key(server: &str) -> String {
        format!("{SERVER_PLAYERS_PREFIX}{server}")
    }

    pub async fn get(&self, server: &str) -> CacheResult<Option<Vec<ServerPlayer>>> {
        read_json(self.backend.as_ref(), &Self::key(server)).await
    }

    pub async fn put(&self, server: &str, players: &[ServerPlayer]) -> CacheResult<()> {
        write_json(
            self.backend.as_ref(),
            &Self::key(server),
            players,
            Some(self.ttl_seconds),
        )
        .await?;

        tracing::debug!(
            server = %server,
            players = players.len(),
            ttl = self.ttl_seconds,
            "Cached server player list"
        );

        Ok(())
    }
}

impl std::fmt::Debug for ServerPlayerCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerPlayerCache")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
