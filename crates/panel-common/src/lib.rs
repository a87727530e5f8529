//! # panel-common
//!
//! Shared utilities including configuration, error handling, staff sessions, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService, TokenPair, TokenType};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    PanelConfig, RateLimitConfig, RedisConfig, ServerConfig, ServersConfig, SteamConfig,
};
pub use error::AppError;
pub use telemetry::{init_tracing, TracingConfig, TracingError};
