//! Test fixtures and data generators
//!
//! Seeds players directly through SQL and mints staff tokens with the
//! configured JWT secret.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use panel_common::{AppConfig, JwtService, TokenPair};
use panel_core::SteamIdentifier;
use panel_db::PgPool;
use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Steam identifier unlikely to collide across test runs
pub fn unique_steam_identifier() -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    let seed = (nanos ^ (unique_suffix() << 24)) & 0xffff_ffff;
    format!("steam:1100001{seed:08x}")
}

/// A player row seeded for a test
#[derive(Debug, Clone)]
pub struct SeededPlayer {
    pub user_id: i64,
    pub steam_identifier: String,
    pub player_name: String,
}

impl SeededPlayer {
    /// Insert a regular player with a license identifier
    pub async fn insert(pool: &PgPool, name_prefix: &str) -> Result<Self> {
        Self::insert_with_flags(pool, name_prefix, false, false).await
    }

    /// Insert a staff member
    pub async fn insert_staff(pool: &PgPool, super_admin: bool) -> Result<Self> {
        Self::insert_with_flags(pool, "Staff", true, super_admin).await
    }

    async fn insert_with_flags(
        pool: &PgPool,
        name_prefix: &str,
        is_staff: bool,
        is_super_admin: bool,
    ) -> Result<Self> {
        let steam_identifier = unique_steam_identifier();
        let player_name = format!("{name_prefix} {}", unique_suffix());
        let identifiers = serde_json::json!([
            steam_identifier,
            format!("license:{}", &steam_identifier[6..]),
            "ip:127.0.0.1",
        ]);

        let user_id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO users (steam_identifier, player_name, identifiers, is_staff, is_super_admin, last_connection)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING user_id
            ",
        )
        .bind(&steam_identifier)
        .bind(&player_name)
        .bind(identifiers)
        .bind(is_staff)
        .bind(is_super_admin)
        .fetch_one(pool)
        .await?;

        Ok(Self {
            user_id,
            steam_identifier,
            player_name,
        })
    }

    /// Access and refresh tokens for this player
    pub fn tokens(&self, config: &AppConfig) -> Result<TokenPair> {
        let jwt = JwtService::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry,
            config.jwt.refresh_token_expiry,
        );
        let steam = SteamIdentifier::parse(&self.steam_identifier)?;
        Ok(jwt.issue(&steam)?)
    }
}

/// Add warning request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarningRequest {
    pub message: String,
    pub warning_type: Option<String>,
}

impl CreateWarningRequest {
    pub fn warning(message: &str) -> Self {
        Self {
            message: message.to_string(),
            warning_type: None,
        }
    }

    pub fn note(message: &str) -> Self {
        Self {
            message: message.to_string(),
            warning_type: Some("note".to_string()),
        }
    }
}

/// Issue ban request
#[derive(Debug, Default, Serialize)]
pub struct IssueBanRequest {
    pub reason: Option<String>,
    pub expire: Option<i64>,
}

/// Token refresh request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Authenticated staff member
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffResponse {
    pub id: i64,
    pub steam_identifier: String,
    pub player_name: String,
    pub avatar: String,
}

/// Refreshed session
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub staff: StaffResponse,
}

/// Warning response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningResponse {
    pub id: i64,
    pub player_id: i64,
    pub issuer_id: i64,
    pub message: String,
    pub warning_type: String,
}

/// Ban row response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanResponse {
    pub ban_hash: String,
    pub identifier: String,
    pub reason: Option<String>,
    pub creator_identifier: Option<String>,
    pub is_permanent: bool,
}

/// One page of a listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub next_page: Option<u32>,
}

/// Search hit
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i64,
    pub steam_identifier: String,
    pub player_name: String,
}

/// Panel log entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLogResponse {
    pub source_identifier: String,
    pub target_identifier: String,
    pub action: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
