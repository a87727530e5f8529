//! Configuration module

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    PanelConfig, RateLimitConfig, RedisConfig, ServerConfig, ServersConfig, SteamConfig,
};
