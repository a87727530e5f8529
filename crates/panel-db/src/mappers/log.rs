//! Log model -> entity

use panel_core::entities::LogEntry;

use crate::models::LogModel;

impl From<LogModel> for LogEntry {
    fn from(model: LogModel) -> Self {
        LogEntry {
            id: model.id,
            identifier: model.identifier,
            action: model.action,
            details: model.details,
            metadata: model.metadata.map(|json| json.0),
            timestamp: model.timestamp,
        }
    }
}
