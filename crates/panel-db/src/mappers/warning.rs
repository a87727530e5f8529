//! Warning and panel log models -> entities

use panel_core::entities::{PanelLog, Warning, WarningType};

use crate::models::{PanelLogModel, WarningModel};

impl From<WarningModel> for Warning {
    fn from(model: WarningModel) -> Self {
        Warning {
            id: model.id,
            player_id: model.player_id,
            issuer_id: model.issuer_id,
            message: model.message,
            // the column is constrained to the known kinds
            warning_type: model.warning_type.parse().unwrap_or(WarningType::Warning),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<PanelLogModel> for PanelLog {
    fn from(model: PanelLogModel) -> Self {
        PanelLog {
            id: model.id,
            source_identifier: model.source_identifier,
            target_identifier: model.target_identifier,
            action: model.action,
            log: model.log,
            timestamp: model.timestamp,
        }
    }
}
