//! Panel log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PanelLogModel {
    pub id: i64,
    pub source_identifier: String,
    pub target_identifier: String,
    pub action: String,
    pub log: String,
    pub timestamp: DateTime<Utc>,
}
