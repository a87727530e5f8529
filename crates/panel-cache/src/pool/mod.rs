//! Redis connection pool

mod redis_pool;

pub use redis_pool::{CacheError, CacheResult, RedisPool, RedisPoolConfig, SharedRedisPool};
