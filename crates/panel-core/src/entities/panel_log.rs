//! Panel log - audit record of a staff action taken through the panel

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLog {
    pub id: i64,
    pub source_identifier: String,
    pub target_identifier: String,
    pub action: String,
    pub log: String,
    pub timestamp: DateTime<Utc>,
}
