//! Warning database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct WarningModel {
    pub id: i64,
    pub player_id: i64,
    pub issuer_id: i64,
    pub message: String,
    pub warning_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
