//! Player log database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for the user_logs table
#[derive(Debug, Clone, FromRow)]
pub struct LogModel {
    pub id: i64,
    pub identifier: String,
    pub action: String,
    pub details: String,
    pub metadata: Option<Json<serde_json::Value>>,
    pub timestamp: DateTime<Utc>,
}
