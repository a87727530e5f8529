//! # panel-cache
//!
//! Redis caching layer for the staff panel.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Server Players**: Short-lived per-server player lists
//! - **Masked Profiles**: Last known profile of a masked identity
//! - **Lookups**: Player names and Steam profile summaries
//!
//! ## Example
//!
//! ```ignore
//! use panel_cache::{RedisPool, RedisPoolConfig, ServerPlayerCache};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let servers = ServerPlayerCache::with_ttl(Arc::new(pool), 10);
//!
//! if let Some(players) = servers.get("c1s1.op-framework.com:30120").await? {
//!     println!("{} players online", players.len());
//! }
//! ```

pub mod backend;
pub mod players;
pub mod pool;
pub mod servers;
pub mod steam;

pub use backend::{CacheBackend, MemoryCache, SharedCacheBackend};

pub use pool::{CacheError, CacheResult, RedisPool, RedisPoolConfig, SharedRedisPool};

pub use players::{MaskedProfileStore, PlayerNameStore, MASKED_PROFILE_TTL};
pub use servers::ServerPlayerCache;
pub use steam::{SteamProfile, SteamProfileStore};
