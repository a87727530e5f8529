//! Response DTOs for API endpoints
//!
//! Field names are camelCase for the panel frontend. Profile DTOs also
//! deserialize, since masked profiles are cached as JSON.

use chrono::{DateTime, NaiveDate, Utc};
use panel_core::{OnlinePlayers, PlayerRoles, PlayerStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Common Response Types
// ============================================================================

/// One page of a listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
}

impl<T> PageResponse<T> {
    /// Build from rows fetched with one extra row as look-ahead
    pub fn from_lookahead(mut rows: Vec<T>, page: panel_core::PageRequest) -> Self {
        let has_more = rows.len() > page.per_page as usize;
        rows.truncate(page.per_page as usize);

        Self {
            data: rows,
            page: page.page,
            prev_page: page.prev_page(),
            next_page: page.next_page(has_more),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            prev_page: self.prev_page,
            next_page: self.next_page,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub staff: StaffResponse,
}

/// The authenticated staff member
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffResponse {
    pub id: i64,
    pub steam_identifier: String,
    pub player_name: String,
    pub avatar: String,
    pub roles: PlayerRoles,
}

// ============================================================================
// Player Responses
// ============================================================================

/// Player row in search results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i64,
    pub steam_identifier: String,
    pub player_name: String,
    pub play_time: i64,
    pub total_joins: i64,
    pub last_connection: Option<DateTime<Utc>>,
    pub is_staff: bool,
    pub is_super_admin: bool,
    pub is_trusted: bool,
    pub is_soft_banned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierResponse {
    pub identifier: String,
    pub label: Option<String>,
}

/// Player header of a profile page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfileResponse {
    pub id: i64,
    pub avatar: Option<String>,
    pub discord: Option<String>,
    pub steam_identifier: String,
    /// Real identifier behind a masked profile
    pub override_steam: Option<String>,
    pub steam36: String,
    pub player_name: String,
    pub play_time: i64,
    pub last_connection: Option<DateTime<Utc>>,
    pub steam_profile_url: String,
    pub is_trusted: bool,
    pub is_debugger: bool,
    pub is_panel_trusted: bool,
    pub is_staff: bool,
    pub is_super_admin: bool,
    pub is_root: bool,
    pub is_banned: bool,
    pub warnings: i64,
    pub ban: Option<BanResponse>,
    pub status: PlayerStatus,
    #[serde(default)]
    pub identifiers: Vec<IdentifierResponse>,
}

/// Full profile: real players and masked identities share this shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetailResponse {
    pub player: PlayerProfileResponse,
    pub characters: Vec<CharacterResponse>,
    pub warnings: Vec<WarningResponse>,
    pub panel_logs: Vec<PanelLogResponse>,
}

impl PlayerDetailResponse {
    #[inline]
    pub fn is_masked(&self) -> bool {
        self.player.override_steam.is_some()
    }
}

// ============================================================================
// Character Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub id: i64,
    pub steam_identifier: String,
    pub slot: i32,
    pub gender: i32,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub cash: i64,
    pub bank: i64,
    pub money: i64,
    pub stocks_balance: i64,
    pub job_name: Option<String>,
    pub department_name: Option<String>,
    pub position_name: Option<String>,
    pub backstory: Option<String>,
    pub character_deleted: bool,
    pub character_deletion_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i64,
    pub owner_cid: i64,
    pub model_name: String,
    pub plate: String,
    pub garage_identifier: Option<String>,
    pub mileage: f64,
}

/// Character with vehicles and owning player
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedCharacterResponse {
    #[serde(flatten)]
    pub character: CharacterResponse,
    pub vehicles: Vec<VehicleResponse>,
    pub player: Option<PlayerResponse>,
}

// ============================================================================
// Moderation Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanResponse {
    pub id: i64,
    pub ban_hash: String,
    pub identifier: String,
    pub creator_name: Option<String>,
    pub creator_identifier: Option<String>,
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub expire: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_permanent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningResponse {
    pub id: i64,
    pub player_id: i64,
    pub issuer_id: i64,
    pub message: String,
    pub warning_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLogResponse {
    pub id: i64,
    pub source_identifier: String,
    pub target_identifier: String,
    pub action: String,
    pub log: String,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Log Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogResponse {
    pub id: i64,
    pub steam_identifier: String,
    pub action: String,
    pub details: String,
    pub metadata: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
    pub server_id: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub prev: Option<u32>,
    pub next: Option<u32>,
}

/// Log listing with echoed filters and the names of the logged players
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogListResponse {
    pub logs: Vec<LogResponse>,
    pub filters: super::requests::LogQuery,
    pub links: PageLinks,
    /// Query time in milliseconds
    pub time: u64,
    pub player_map: HashMap<String, String>,
    pub page: u32,
}

// ============================================================================
// Server Responses
// ============================================================================

/// Online players across all tracked servers
#[derive(Debug, Clone, Serialize)]
pub struct OnlinePlayersResponse {
    /// False when a server's player list could not be fetched
    pub available: bool,
    pub players: OnlinePlayers,
}

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
