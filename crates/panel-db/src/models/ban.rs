//! Ban database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the user_bans table
#[derive(Debug, Clone, FromRow)]
pub struct BanModel {
    pub id: i64,
    pub ban_hash: String,
    pub identifier: String,
    pub creator_name: Option<String>,
    pub creator_identifier: Option<String>,
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub expire: Option<i64>,
}
