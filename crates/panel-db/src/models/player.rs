//! Player database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct PlayerModel {
    pub user_id: i64,
    pub steam_identifier: String,
    pub player_name: String,
    pub identifiers: Json<Vec<String>>,
    pub is_staff: bool,
    pub is_super_admin: bool,
    pub is_trusted: bool,
    pub is_panel_trusted: bool,
    pub is_debugger: bool,
    pub is_soft_banned: bool,
    pub playtime: i64,
    pub total_joins: i64,
    pub priority_level: i32,
    pub last_connection: Option<DateTime<Utc>>,
}

/// Steam identifier and name only
#[derive(Debug, Clone, FromRow)]
pub struct PlayerNameModel {
    pub steam_identifier: String,
    pub player_name: String,
}
