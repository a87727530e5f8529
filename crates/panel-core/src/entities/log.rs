//! Log entry - the in-game player audit trail (`user_logs`)

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub identifier: String,
    pub action: String,
    pub details: String,
    pub metadata: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Server id embedded in the details as ` [<id>] `
    pub fn server_id(&self) -> Option<u32> {
        let start = self.details.find(" [")? + 2;
        let end = start + self.details[start..].find("] ")?;
        self.details[start..end].parse().ok()
    }
}
