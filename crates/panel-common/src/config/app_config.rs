//! Application configuration structs
//!
//! Loads configuration from a `.env` file and environment variables.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub servers: ServersConfig,
    pub steam: SteamConfig,
    pub panel: PanelConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations on startup
    #[serde(default)]
    pub run_migrations: bool,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Game servers polled for online players
#[derive(Debug, Clone, Deserialize)]
pub struct ServersConfig {
    /// Server addresses (`host:port`), in priority order
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default = "default_player_path")]
    pub player_path: String,
    #[serde(default = "default_server_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_server_cache_ttl")]
    pub cache_ttl_secs: u64,
}

/// Steam Web API access
#[derive(Debug, Clone, Deserialize)]
pub struct SteamConfig {
    /// Profile lookups are skipped without a key
    pub api_key: Option<String>,
    #[serde(default = "default_steam_cache_ttl")]
    pub cache_ttl_secs: u64,
}

/// Panel access and caching
#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Steam identifiers with root access
    #[serde(default)]
    pub root_users: Vec<String>,
    #[serde(default = "default_name_cache_ttl")]
    pub name_cache_ttl_secs: u64,
}

// Default value functions
fn default_app_name() -> String {
    "op-fw-panel".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_access_token_expiry() -> i64 {
    3600 // 1 hour
}

fn default_refresh_token_expiry() -> i64 {
    604800 // 7 days
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_player_path() -> String {
    "/op-framework/connections.json".to_string()
}

fn default_server_timeout() -> u64 {
    3
}

fn default_server_cache_ttl() -> u64 {
    10
}

fn default_steam_cache_ttl() -> u64 {
    86400 // 1 day
}

fn default_name_cache_ttl() -> u64 {
    86400 // 1 day
}

/// Read an optional variable, failing if it is set but unparsable
fn env_parse<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, value)),
        _ => Ok(None),
    }
}

/// Comma separated list, empty entries skipped
fn env_list(key: &'static str) -> Vec<String> {
    env::var(key)
        .map(|s| parse_list(&s))
        .unwrap_or_default()
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn env_required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingVar(key))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env_parse("API_PORT")?.ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: env_required("DATABASE_URL")?,
                max_connections: env_parse("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: env_parse("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                run_migrations: env_parse("DATABASE_RUN_MIGRATIONS")?.unwrap_or(false),
            },
            redis: RedisConfig {
                url: env_required("REDIS_URL")?,
                max_connections: env_parse("REDIS_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_redis_max_connections),
            },
            jwt: JwtConfig {
                secret: env_required("JWT_SECRET")?,
                access_token_expiry: env_parse("JWT_ACCESS_TOKEN_EXPIRY")?
                    .unwrap_or_else(default_access_token_expiry),
                refresh_token_expiry: env_parse("JWT_REFRESH_TOKEN_EXPIRY")?
                    .unwrap_or_else(default_refresh_token_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env_parse("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: env_parse("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env_list("CORS_ALLOWED_ORIGINS"),
            },
            servers: ServersConfig {
                addresses: env_list("OP_FW_SERVERS"),
                player_path: env::var("OP_FW_PLAYER_PATH")
                    .unwrap_or_else(|_| default_player_path()),
                request_timeout_secs: env_parse("OP_FW_REQUEST_TIMEOUT")?
                    .unwrap_or_else(default_server_timeout),
                cache_ttl_secs: env_parse("SERVER_CACHE_TTL")?
                    .unwrap_or_else(default_server_cache_ttl),
            },
            steam: SteamConfig {
                api_key: env::var("STEAM_API_KEY").ok().filter(|key| !key.is_empty()),
                cache_ttl_secs: env_parse("STEAM_CACHE_TTL")?
                    .unwrap_or_else(default_steam_cache_ttl),
            },
            panel: PanelConfig {
                root_users: env_list("ROOT_USERS"),
                name_cache_ttl_secs: env_parse("PLAYER_NAME_CACHE_TTL")?
                    .unwrap_or_else(default_name_cache_ttl),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
